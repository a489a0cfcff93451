use crate::state::ServerState;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::Json;
use normalize::STAGES;
use serde_json::json;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

fn uptime_seconds() -> u64 {
    SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "textfix-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
    }))
}

/// Readiness check endpoint
///
/// The pipeline has nothing to warm up, so readiness only reports the stage
/// order it will run.
pub async fn readiness_check() -> impl IntoResponse {
    let stages: Vec<&str> = STAGES.iter().map(|stage| stage.name()).collect();

    Json(json!({
        "status": "ready",
        "service": "textfix-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
        "pipeline": stages,
    }))
}

/// Prometheus metrics endpoint
///
/// Falls back to a JSON uptime stub when no recorder was installed.
pub async fn metrics(State(state): State<Arc<ServerState>>) -> Response {
    match &state.prometheus {
        Some(handle) => (
            [(CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => Json(json!({
            "uptime_seconds": uptime_seconds(),
        }))
        .into_response(),
    }
}
