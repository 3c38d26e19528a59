//! Connection pool and collection bootstrap for PostgreSQL

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::domain::repositories::RepositoryError;

/// Builds a pool without opening a connection
///
/// Connections are established on first use, so the server can start
/// while the database is still unreachable. Only a malformed URL fails here.
pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)
}

/// Creates the backing table of each collection if it does not exist
pub async fn ensure_collections(pool: &PgPool, names: &[&str]) -> Result<(), RepositoryError> {
    for name in names {
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id UUID PRIMARY KEY,
                seq BIGSERIAL NOT NULL,
                doc JSONB NOT NULL DEFAULT '{{}}'::jsonb
            )
            "#,
            name
        );
        sqlx::query(&ddl).execute(pool).await?;
        tracing::debug!(collection = %name, "collection ready");
    }

    Ok(())
}
