//! HTTP server for the quote and options API
//!
//! Provides:
//! - GET /stock/{symbol}
//! - GET /options/{symbol}?expiration=YYYY-MM-DD
//! - GET / and GET /health

pub mod handlers;
pub mod types;

use crate::config::ServerConfig;
use crate::error::{AppError, Result};
use crate::state::AppState;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    // Allow all origins; the dashboard runs on a different local port
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/stock/:symbol", get(handlers::get_stock))
        .route("/options/:symbol", get(handlers::get_options))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until ctrl-c
pub async fn serve(config: &ServerConfig, state: Arc<AppState>) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid address: {}", e)))?;

    let app = build_router(state);

    info!("Starting OptionsWiz API server on {}", addr);
    info!("");
    info!("=== Endpoints ===");
    info!("  GET  http://{}:{}/", config.host, config.port);
    info!("  GET  http://{}:{}/health", config.host, config.port);
    info!("  GET  http://{}:{}/stock/{{symbol}}", config.host, config.port);
    info!(
        "  GET  http://{}:{}/options/{{symbol}}?expiration=YYYY-MM-DD",
        config.host, config.port
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("API server shutting down");
}
