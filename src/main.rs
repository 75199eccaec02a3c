//! MealHub Server — recipe and meal-planning backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use mealhub_core::config::AppConfig;
use mealhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("MEALHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting MealHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db = mealhub_database::connection::DatabasePool::connect(&config.database).await?;
    mealhub_database::migration::run_migrations(db.pool()).await?;

    // ── Wire state and router ────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = mealhub_api::state::AppState::new(Arc::new(config), db.clone());
    let app = mealhub_api::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("MealHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("MealHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
