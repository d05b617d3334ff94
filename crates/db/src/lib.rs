//! PostgreSQL persistence for inquiries.
//!
//! The `inquiries` table plays the role of the document collection; see
//! [`PgInquiryStore`] for the [`eventdesk_core::store::InquiryStore`]
//! implementation the API server is wired with.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
mod store;

pub use store::PgInquiryStore;

pub type DbPool = sqlx::PgPool;

/// Create a lazily-connecting pool from a database URL.
///
/// No connection is opened until first use, so the server can start while
/// the database is down. `acquire_timeout` bounds how long a query waits for
/// a connection before failing with `PoolTimedOut`.
pub fn create_pool(database_url: &str, acquire_timeout: Duration) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(acquire_timeout)
        .connect_lazy(database_url)
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations under `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
