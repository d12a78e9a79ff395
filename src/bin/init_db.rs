//! Schema initializer entry point.
//!
//! One-shot process meant to run once at stack startup, before `import_data`
//! or anything else touches the database. The database container may still
//! be coming up, so connection and DDL failures are retried on a fixed
//! schedule before giving up:
//! - `DB_INIT_MAX_ATTEMPTS` total attempts (default: 5)
//! - `DB_INIT_RETRY_SECS` between attempts (default: 5)
//!
//! Exits 0 once both tables exist; propagates the final error (non-zero
//! exit) after exhausting all attempts.
use std::time::Duration;

use anyhow::Result;
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;

use graph_loader::{config, init_tracing, retry, schema, Config};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    init_tracing();
    dotenv().ok();

    let cfg = config::load_from_env()?;
    cfg.log_config();

    let max_attempts = cfg.init_max_attempts;
    let retry_delay = Duration::from_secs(u64::from(cfg.init_retry_secs));

    let result = retry::with_fixed_retry(max_attempts, retry_delay, |attempt| {
        let cfg = cfg.clone();
        async move {
            tracing::info!(
                "Initializing database '{}' on '{}' (attempt {}/{})",
                cfg.db_name,
                cfg.db_host,
                attempt,
                max_attempts
            );
            try_init(&cfg).await
        }
    })
    .await;

    match result {
        Ok(()) => {
            tracing::info!("Database initialized successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Max retries reached. Database initialization failed.");
            Err(e)
        }
    }
}

// ---

/// One initialization attempt: connect, apply the schema, release the
/// connection. All-or-nothing per attempt; the schema DDL runs in a single
/// transaction.
async fn try_init(cfg: &Config) -> Result<()> {
    // ---
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

    schema::create_schema(&pool).await?;
    pool.close().await;

    Ok(())
}
