use recipe_service::{
    build_router,
    config::RecipeConfig,
    services::{init_metrics, MongoDb, MongoRecipeStore},
    AppState,
};
use service_core::error::AppError;
use service_core::observability::{init_tracing, shutdown_tracing};
use std::sync::Arc;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = RecipeConfig::load()?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );
    init_metrics()?;

    tracing::info!(
        service = %config.service_name,
        version = %config.service_version,
        environment = ?config.environment,
        "Starting recipe service"
    );

    // Unreachable store is fatal: no retry, no listener.
    let db = MongoDb::connect(&config.mongodb).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to connect to MongoDB");
        e
    })?;
    tracing::info!("Connected to MongoDB");

    let state = AppState::new(Arc::new(MongoRecipeStore::new(db)));
    let app = build_router(state, config.swagger.enabled);

    let addr = config.common.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
        AppError::from(e)
    })?;

    tracing::info!(address = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Service shutdown complete");
    shutdown_tracing();
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
