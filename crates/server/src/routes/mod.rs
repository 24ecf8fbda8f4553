//! API route handlers
//!
//! - `health`: liveness and readiness probes
//! - `convert`: the text-to-JSON conversion endpoint

pub mod convert;
pub mod health;

use crate::error::{ApiError, ServerError, ServerResult};
use crate::middleware::CorrelationId;
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Root endpoint (GET /), no authentication required.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "txt2json",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/v1/convert/text-to-json",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Undefined routes get the standard error envelope, correlation id
/// included.
pub async fn not_found(Extension(correlation): Extension<CorrelationId>) -> ApiError {
    ApiError::new(correlation.0, ServerError::NotFound)
}
