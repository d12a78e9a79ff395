//! Shared library for the `graph-loader` database tools.
//!
//! Two one-shot binaries build on this crate:
//! - `init_db` – creates the `login` and `graph` tables, retrying while the
//!   database comes up (e.g. inside a compose stack)
//! - `import_data` – bulk-loads a CSV file of measurement rows into the
//!   `graph` table, skipping rows that hit a uniqueness conflict
//!
//! This module follows the Explicit Module Boundary Pattern (EMBP): the
//! binaries only import from this gateway, which delegates configuration to
//! `config`, DDL to `schema`, parsing/inserting to `import`, and the
//! startup retry policy to `retry`.
use std::{env, io::IsTerminal};

use tracing_subscriber::filter::EnvFilter;

pub mod config;
pub mod import;
pub mod models;
pub mod retry;
pub mod schema;

pub use config::Config;
pub use models::GraphReading;

// ---

/// Initialize the global tracing subscriber for structured logging.
///
/// Configuration mirrors the rest of the crate's env-driven style:
/// - Color output controlled by TTY detection and `FORCE_COLOR` env var:
///   - `FORCE_COLOR=1|true|yes`: force colors on
///   - `FORCE_COLOR=0|false|no`: force colors off
///   - unset or other values: auto-detect TTY
/// - Log level controlled by `RUST_LOG` if set, otherwise `LOADER_LOG_LEVEL`
///   (default: `info`); `sqlx::query` is clamped to `warn` either way
///
/// Call once at process startup, before any logging macros run. Installs the
/// subscriber globally for the lifetime of the process.
pub fn init_tracing() {
    // ---
    // Determine if we should use colors
    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stdout().is_terminal(),
    };

    // Use RUST_LOG if available, otherwise fall back to LOADER_LOG_LEVEL
    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match env::var("LOADER_LOG_LEVEL").ok().as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ => "info",
        };
        EnvFilter::new(format!("{level},sqlx::query=warn"))
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}
