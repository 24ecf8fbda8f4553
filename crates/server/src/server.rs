//! Server initialization and routing
//!
//! Axum server setup: router configuration, middleware stack, and
//! graceful shutdown handling.

use crate::config::ServerConfig;
use crate::middleware::{catch_panics, correlation_id, log_requests};
use crate::routes::{api_info, convert, health, not_found};
use crate::state::AppState;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Routes:
/// - Public probes: /, /health, /ready
/// - API: POST /v1/convert/text-to-json (Basic auth checked in the
///   handler, because the 401 contract must fire before the body is
///   even buffered; the handler also owns the body cap, so an
///   over-limit body gets the standard 413 envelope)
///
/// The middleware stack, outermost first: trace, correlation id,
/// request logging, panic catching, CORS, compression, timeout. The
/// correlation id sits outside the panic catcher so even a panicking
/// request answers with its entry-time id.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let public_routes = Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check));

    let api_routes =
        Router::new().route("/v1/convert/text-to-json", post(convert::convert_text));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .fallback(not_found)
        .layer(TimeoutLayer::new(state.config.timeout()))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(catch_panics))
        .layer(from_fn(log_requests))
        .layer(from_fn(correlation_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the txt2json HTTP server
///
/// Initializes structured JSON logging, builds the router around the
/// configured secret store, binds, and serves until SIGTERM or Ctrl+C.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .json()
        .init();

    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!(
        "Starting txt2json server on {} (secret store: {})",
        addr,
        config.secret_store_url
    );
    tracing::info!(
        "Timeout: {}s, max file size: {} bytes",
        config.timeout_secs,
        config.upload.max_file_bytes
    );

    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
