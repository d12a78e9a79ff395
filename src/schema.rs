//! Database schema management for `graph-loader`.
//!
//! Ensures both tables exist before the importer (or anything downstream)
//! depends on them. Applied by the `init_db` binary (EMBP: single gateway
//! call).

use anyhow::Result;
use sqlx::PgPool;

// ---

/// Create the database schema (idempotent).
///
/// Creates the `login` credential table and the `graph` measurement table.
/// Safe to run repeatedly; both statements are conditioned on non-existence.
/// Runs inside one transaction so a given attempt is all-or-nothing.
///
/// Errors are propagated if any SQL execution fails.
pub async fn create_schema(pool: &PgPool) -> Result<()> {
    // ---
    let mut tx = pool.begin().await?;

    // Credential table; declared here only, no code path writes to it
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS login (
            id       SERIAL PRIMARY KEY,
            username VARCHAR(50) UNIQUE NOT NULL,
            password VARCHAR(100) NOT NULL
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // Measurement table populated by `import_data`
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS graph (
            id               SERIAL PRIMARY KEY,
            tension          DECIMAL,
            torsion          DECIMAL,
            bending_moment_x DECIMAL,
            bending_moment_y DECIMAL,
            time_seconds     DECIMAL,
            temperature      DECIMAL
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}
