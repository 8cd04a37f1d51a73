//! RezGenie API Server.

use std::net::SocketAddr;

use eyre::Result;
use rezgenie_api::{AppState, app};
use rezgenie_core::{RequestPolicy, Settings, telemetry};
use rezgenie_storage as storage;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::from_env()?;
    telemetry::init(RequestPolicy::from_settings(&settings).debug);

    tracing::info!(environment = %settings.environment, "Starting RezGenie API Server");

    // Connect to database
    let pool = storage::connect(&settings.database_url).await?;

    // Run migrations
    storage::migrate::run(&pool).await?;

    tracing::info!("Database ready");

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.api_port));
    let app = app::build(AppState::new(settings, pool));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
