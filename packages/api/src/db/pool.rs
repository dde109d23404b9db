//! Database connection pool using OnceCell pattern.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::settings::Database;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Get or initialize the database connection pool.
///
/// `settings` is only read by the first call.
pub async fn get_pool(settings: &Database) -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        tracing::info!(
            host = %settings.host,
            database = %settings.database,
            "connecting to postgres"
        );
        PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .connect(&settings.url())
            .await
    })
    .await
}
