//! CSV parsing and bulk insert for the `graph` table.
//!
//! The importer is deliberately one-shot: parse the whole file into memory,
//! send one multi-row insert, commit. Scalability is bounded by file size
//! and the statement's bind-parameter limit; rows violating a uniqueness
//! constraint are skipped by the database rather than failing the batch.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::GraphReading;

// ---

/// Pick the importer's input file: CLI argument wins, then configuration.
pub fn resolve_input_path(arg: Option<String>, configured: &str) -> PathBuf {
    // ---
    match arg {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(configured),
    }
}

/// Read and parse a graph CSV file.
///
/// Propagates I/O errors (missing/unreadable file) and parse errors
/// unchanged; the caller aborts on the first failure.
pub fn read_graph_csv(path: &Path) -> Result<Vec<GraphReading>> {
    // ---
    let file =
        File::open(path).with_context(|| format!("Failed to open CSV file {}", path.display()))?;
    parse_graph_csv(file)
}

/// Parse graph rows from any CSV source.
///
/// The first record is a header and is discarded; every subsequent record
/// must hold exactly six numeric fields in column order. Any malformed
/// record fails the whole parse, so nothing partial ever reaches the
/// database.
pub fn parse_graph_csv<R: Read>(reader: R) -> Result<Vec<GraphReading>> {
    // ---
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut readings = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("Malformed CSV data row {}", i + 1))?;
        // Positional deserialization; header names are irrelevant
        let reading: GraphReading = record
            .deserialize(None)
            .with_context(|| format!("Malformed CSV data row {}", i + 1))?;
        readings.push(reading);
    }

    Ok(readings)
}

/// Build the single multi-row insert covering all readings.
///
/// The `ON CONFLICT DO NOTHING` clause has no explicit conflict target: the
/// shown schema declares no natural key on `graph`, so the bare form acts as
/// a safeguard against any constraint added out of band while staying a
/// no-op otherwise.
fn build_insert(readings: &[GraphReading]) -> QueryBuilder<'static, Postgres> {
    // ---
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
        "INSERT INTO graph \
         (tension, torsion, bending_moment_x, bending_moment_y, time_seconds, temperature) ",
    );

    qb.push_values(readings, |mut row, r| {
        row.push_bind(r.tension)
            .push_bind(r.torsion)
            .push_bind(r.bending_moment_x)
            .push_bind(r.bending_moment_y)
            .push_bind(r.time_seconds)
            .push_bind(r.temperature);
    });
    qb.push(" ON CONFLICT DO NOTHING");
    qb
}

/// Insert all readings into the `graph` table in one statement.
///
/// Runs in a single transaction with one commit; on any database error the
/// transaction rolls back on drop and the error propagates, so there is no
/// partial commit. Returns the number of rows actually inserted (conflicting
/// rows are skipped and not counted).
pub async fn insert_readings(pool: &PgPool, readings: &[GraphReading]) -> Result<u64> {
    // ---
    if readings.is_empty() {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    let result = build_insert(readings).build().execute(&mut *tx).await?;
    tx.commit().await?;

    Ok(result.rows_affected())
}
