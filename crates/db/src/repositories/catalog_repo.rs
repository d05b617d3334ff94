//! Read-only queries against the PostgreSQL catalog, used by health probes.

use sqlx::PgPool;

pub struct CatalogRepo;

impl CatalogRepo {
    /// Name of the database the pool is connected to.
    pub async fn database_name(pool: &PgPool) -> Result<String, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT current_database()::text")
            .fetch_one(pool)
            .await
    }

    /// Up to `limit` table names from the `public` schema, alphabetically.
    pub async fn list_tables(pool: &PgPool, limit: usize) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT table_name::text FROM information_schema.tables \
             WHERE table_schema = 'public' AND table_type = 'BASE TABLE' \
             ORDER BY table_name \
             LIMIT $1",
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(pool)
        .await
    }
}
