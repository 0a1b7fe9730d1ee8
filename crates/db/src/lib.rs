//! Persistence layer: models, store traits, and their adapters.
//!
//! Stores are reached through the [`store::JobStore`] and
//! [`store::RedemptionStore`] traits. Production uses the Postgres
//! adapters in [`postgres`]; tests and local development use the
//! in-memory adapters in [`memory`]. Which redemption adapter to use in
//! production is decided once at startup by
//! [`postgres::probe_redemption_schema`].

pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

use pawsona_core::error::CoreError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Database connection pool alias used across the workspace.
pub type DbPool = PgPool;

/// Create a connection pool against `database_url`.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Cheap liveness probe: `SELECT 1`.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Map a sqlx error into the domain storage error, keeping the detail in
/// the log rather than the message shown to callers.
pub(crate) fn storage_error(context: &str, err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "{context}");
    CoreError::Storage(context.to_string())
}
