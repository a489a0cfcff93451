//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints
//! - Middleware stack (request IDs, logging, timeouts, compression, CORS)
//! - Metrics recorder installation
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::telemetry::{install_recorder, PrometheusPipelineMetrics};
use crate::middleware::{log_requests, request_id};
use crate::routes::{api_info, health, not_found, text};
use crate::state::ServerState;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
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
/// Middleware, outermost first:
/// 1. HTTP tracing spans
/// 2. Request ID tracking
/// 3. Request logging (sees the request ID)
/// 4. CORS
/// 5. Compression
/// 6. Timeout
/// 7. Body size limit
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        .route("/handler/text", post(text::handle_text))
        .route("/handler/text/inspect", post(text::inspect_text))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.config.max_body_size()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Textfix HTTP server
///
/// Blocks until the server is shut down via SIGTERM or Ctrl+C.
///
/// # Initialization
///
/// 1. Sets up structured JSON logging with the configured log level
/// 2. Installs the Prometheus recorder and pipeline observer when enabled
/// 3. Builds the Axum router with all routes and middleware
/// 4. Binds to the configured TCP address
/// 5. Starts the HTTP server with graceful shutdown support
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .json()
        .init();

    let mut state = ServerState::new(config.clone());
    if config.metrics_enabled {
        let handle = install_recorder()?;
        textfix::set_pipeline_metrics(Some(Arc::new(PrometheusPipelineMetrics)));
        state = state.with_prometheus(handle);
    }

    let app = build_router(Arc::new(state));

    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!("Starting Textfix server on {}", addr);
    tracing::info!(
        "Timeout: {}s, Max body: {}MB",
        config.timeout_secs,
        config.max_body_size_mb
    );
    tracing::info!(
        "CORS: {}, Metrics: {}",
        config.enable_cors,
        config.metrics_enabled
    );

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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
