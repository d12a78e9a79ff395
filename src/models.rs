//! Simple data models for the graph loader.

use serde::Deserialize;

// ---

/// One measurement row of the `graph` table, as read from the CSV input.
///
/// Field order matches the CSV column order and the insert column list.
/// The database `id` column is serial and never represented here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphReading {
    // ---
    pub tension: f64,
    pub torsion: f64,
    pub bending_moment_x: f64,
    pub bending_moment_y: f64,
    pub time_seconds: f64,
    pub temperature: f64,
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_deserializes_from_positional_record() {
        // ---
        // Headerless positional deserialization is what the importer relies on
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("1.5,-2.25,0.0,10,3.125,21.7".as_bytes());

        let reading: GraphReading = rdr
            .deserialize()
            .next()
            .expect("one record expected")
            .expect("record should deserialize");

        assert_eq!(
            reading,
            GraphReading {
                tension: 1.5,
                torsion: -2.25,
                bending_moment_x: 0.0,
                bending_moment_y: 10.0,
                time_seconds: 3.125,
                temperature: 21.7,
            }
        );
    }

    #[test]
    fn test_rejects_non_numeric_field() {
        // ---
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("1.0,2.0,abc,4.0,5.0,6.0".as_bytes());

        let result: Result<GraphReading, _> = rdr.deserialize().next().unwrap();
        assert!(result.is_err(), "non-numeric field should fail to parse");
    }
}
