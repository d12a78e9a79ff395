//! Configuration loader for the `graph-loader` tools.
//!
//! This module centralizes all runtime configuration values and their
//! defaults, loading from environment variables (with optional `.env` file
//! support provided by the caller). By consolidating configuration logic
//! here, we avoid scattering `env::var` calls throughout the codebase.
use std::env;

use anyhow::{anyhow, Result};
use sqlx::postgres::PgConnectOptions;

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u32 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u32>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Read a string environment variable, falling back to a default when unset.
macro_rules! env_or {
    ($var_name:expr, $default:expr) => {
        env::var($var_name).unwrap_or_else(|_| $default.to_string())
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent
/// configuration snapshot for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Database user name.
    pub db_user: String,

    /// Database password.
    pub db_password: String,

    /// Database name.
    pub db_name: String,

    /// Database host; the default Postgres port is assumed.
    pub db_host: String,

    /// CSV file loaded by `import_data` when no path argument is given.
    pub csv_path: String,

    /// Total connection attempts made by `init_db`.
    pub init_max_attempts: u32,

    /// Seconds slept between `init_db` connection attempts.
    pub init_retry_secs: u32,
}

/// Load configuration from environment variables with defaults.
///
/// Optional (all have defaults matching the compose stack):
/// - `POSTGRES_USER` – database user (default: `postgres`)
/// - `POSTGRES_PASSWORD` – database password (default: `password`)
/// - `POSTGRES_DB` – database name (default: `test_database`)
/// - `POSTGRES_HOST` – database host (default: `db`)
/// - `GRAPH_CSV_PATH` – importer input file (default: `/app/graph.csv`)
/// - `DB_INIT_MAX_ATTEMPTS` – initializer attempts (default: 5)
/// - `DB_INIT_RETRY_SECS` – delay between attempts (default: 5)
///
/// Returns an error only if a numeric variable is set but unparseable.
pub fn load_from_env() -> Result<Config> {
    // ---
    let db_user = env_or!("POSTGRES_USER", "postgres");
    let db_password = env_or!("POSTGRES_PASSWORD", "password");
    let db_name = env_or!("POSTGRES_DB", "test_database");
    let db_host = env_or!("POSTGRES_HOST", "db");
    let csv_path = env_or!("GRAPH_CSV_PATH", "/app/graph.csv");
    let init_max_attempts = parse_env_u32!("DB_INIT_MAX_ATTEMPTS", 5);
    let init_retry_secs = parse_env_u32!("DB_INIT_RETRY_SECS", 5);

    Ok(Config {
        db_user,
        db_password,
        db_name,
        db_host,
        csv_path,
        init_max_attempts,
        init_retry_secs,
    })
}

impl Config {
    /// Connection options built from the discrete parameters.
    ///
    /// No port variable is read; `PgConnectOptions` supplies the Postgres
    /// default (5432).
    pub fn connect_options(&self) -> PgConnectOptions {
        // ---
        PgConnectOptions::new()
            .host(&self.db_host)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }

    /// Log the loaded configuration for debugging purposes.
    ///
    /// Masks the database password while showing all other values.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  POSTGRES_USER        : {}", self.db_user);
        tracing::info!("  POSTGRES_PASSWORD    : ****");
        tracing::info!("  POSTGRES_DB          : {}", self.db_name);
        tracing::info!("  POSTGRES_HOST        : {}", self.db_host);
        tracing::info!("  GRAPH_CSV_PATH       : {}", self.csv_path);
        tracing::info!("  DB_INIT_MAX_ATTEMPTS : {}", self.init_max_attempts);
        tracing::info!("  DB_INIT_RETRY_SECS   : {}", self.init_retry_secs);
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_defaults_applied_when_env_unset() {
        // ---
        // No other test touches these variables
        for key in [
            "POSTGRES_USER",
            "POSTGRES_PASSWORD",
            "POSTGRES_DB",
            "POSTGRES_HOST",
            "GRAPH_CSV_PATH",
            "DB_INIT_MAX_ATTEMPTS",
            "DB_INIT_RETRY_SECS",
        ] {
            env::remove_var(key);
        }

        let cfg = load_from_env().expect("defaults should always load");

        assert_eq!(cfg.db_user, "postgres");
        assert_eq!(cfg.db_password, "password");
        assert_eq!(cfg.db_name, "test_database");
        assert_eq!(cfg.db_host, "db");
        assert_eq!(cfg.csv_path, "/app/graph.csv");
        assert_eq!(cfg.init_max_attempts, 5);
        assert_eq!(cfg.init_retry_secs, 5);
    }

    #[test]
    fn test_connect_options_use_default_port() {
        // ---
        let cfg = Config {
            db_user: "postgres".into(),
            db_password: "password".into(),
            db_name: "test_database".into(),
            db_host: "db".into(),
            csv_path: "/app/graph.csv".into(),
            init_max_attempts: 5,
            init_retry_secs: 5,
        };

        let opts = cfg.connect_options();
        assert_eq!(opts.get_host(), "db");
        assert_eq!(opts.get_username(), "postgres");
        assert_eq!(opts.get_port(), 5432, "no port variable is read");
    }
}
