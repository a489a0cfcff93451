use crate::error::ServerResult;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use normalize::NormalizationTrace;
use serde::{Deserialize, Serialize};

/// Request carrying the raw text to normalize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextHandlerRequest {
    pub text: String,
}

/// Normalized text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextHandlerResponse {
    pub handled_text: String,
}

/// Normalize one block of text.
///
/// # Example
/// ```json
/// // Request
/// { "text": "hello , world !!" }
///
/// // Response
/// { "handled_text": "Hello, world!" }
/// ```
///
/// Whitespace-only text is rejected with `422 EMPTY_RESULT`; a malformed or
/// non-UTF-8 body with `400 BAD_REQUEST`.
pub async fn handle_text(
    payload: Result<Json<TextHandlerRequest>, JsonRejection>,
) -> ServerResult<Json<TextHandlerResponse>> {
    let Json(request) = payload?;
    let handled_text = textfix::process_text(&request.text)?;
    Ok(Json(TextHandlerResponse { handled_text }))
}

/// Same input as [`handle_text`], returning the text after every stage.
pub async fn inspect_text(
    payload: Result<Json<TextHandlerRequest>, JsonRejection>,
) -> ServerResult<Json<NormalizationTrace>> {
    let Json(request) = payload?;
    let trace = textfix::inspect(&request.text)?;
    Ok(Json(trace))
}
