//! Quill content API server entry point.

use std::sync::Arc;

use quill_api::config::Config;
use quill_api::error::AppError;
use quill_api::state::AppState;
use quill_api::{shutdown, telemetry};
use quill_store::PgContentStore;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let _telemetry = telemetry::init(&config)?;

    tracing::info!("Starting Quill content API server");

    // Create database connection pool.
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    let app_state = AppState::new(Arc::new(PgContentStore::new(pool.clone())));
    let app = quill_api::app(app_state);

    tracing::info!("Listening on {}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    // Stop accepting and drain in-flight requests before the pool goes away.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    tracing::info!("Server drained, closing database pool");
    pool.close().await;

    Ok(())
}
