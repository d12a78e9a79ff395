//! CSV importer entry point.
//!
//! One-shot process: parse a graph CSV file and bulk-insert its rows into
//! the `graph` table, letting the database skip duplicates. A single
//! connection attempt, a single statement, a single commit — any failure
//! aborts the run with nothing written.
//!
//! The input file is the first CLI argument if given, else `GRAPH_CSV_PATH`,
//! else `/app/graph.csv`.
use std::env;

use anyhow::Result;
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;

use graph_loader::{config, import, init_tracing};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    init_tracing();
    dotenv().ok();

    let cfg = config::load_from_env()?;
    cfg.log_config();

    let path = import::resolve_input_path(env::args().nth(1), &cfg.csv_path);
    tracing::info!("Importing graph data from {}", path.display());

    let readings = import::read_graph_csv(&path)?;
    if readings.is_empty() {
        tracing::info!("No data rows after the header; nothing to import");
        return Ok(());
    }
    tracing::info!("Parsed {} data rows", readings.len());

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(cfg.connect_options())
        .await
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to connect to database '{}' on '{}': {}",
                cfg.db_name,
                cfg.db_host,
                e
            )
        })?;

    let inserted = import::insert_readings(&pool, &readings).await?;
    pool.close().await;

    let skipped = readings.len() as u64 - inserted;
    tracing::info!(
        "Data imported successfully ({} rows inserted, {} skipped as duplicates)",
        inserted,
        skipped
    );

    Ok(())
}
