//! API route handlers
//!
//! - `health`: liveness, readiness, and metrics
//! - `text`: the normalization endpoints

pub mod health;
pub mod text;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// # Response
///
/// ```json
/// {
///   "name": "Textfix Server",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Textfix Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/handler/text",
            "/handler/text/inspect",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
