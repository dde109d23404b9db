//! `yanote` server binary: load settings, prepare Postgres, serve HTTP.

use anyhow::Context;
use api::db::{PgNoteStore, PgUserStore};
use api::{AppState, Settings};
use tower_http::trace::TraceLayer;
use tower_sessions_sqlx_store::PostgresStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let settings = Settings::new().context("Failed to load settings")?;

    // Initialize database pool
    let pool = api::db::get_pool(&settings.database)
        .await
        .context("Failed to connect to database")?;

    // Run migrations
    api::db::migrate(pool)
        .await
        .context("Failed to run migrations")?;

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("Failed to migrate session store")?;

    let state = AppState::new(PgNoteStore::new(pool.clone()), PgUserStore::new(pool.clone()));
    let router = api::app(state, session_store, &settings.session).layer(TraceLayer::new_for_http());

    let addr = settings.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;
    Ok(())
}
