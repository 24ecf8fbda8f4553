//! The conversion endpoint: `POST /v1/convert/text-to-json`.
//!
//! One state machine per request, terminating in exactly one response:
//!
//! 1. correlation id + start time (id comes from middleware, minted at
//!    request entry)
//! 2. authenticate the `Authorization` header against the secret store
//!    → 401 on failure
//! 3. buffer the body under the configured cap → 413 on overrun
//! 4. extract the file part from the multipart body → 400 on failure
//! 5. validate extension / content type / size → 400 or 413
//! 6. convert (infallible by contract)
//! 7. respond 200 with the `ConversionResult` JSON
//!
//! The handler takes the raw [`Request`] and buffers the body itself,
//! after authentication: credentials are judged from headers alone, so
//! an unauthenticated caller gets its 401 no matter what the body
//! holds, and an over-limit body still answers with the standard error
//! envelope instead of a framework rejection.
//!
//! Every failure path reuses the step-1 correlation id in its envelope.

use crate::error::{ApiError, ServerResult};
use crate::middleware::CorrelationId;
use crate::state::AppState;
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use upload::UploadError;

pub async fn convert_text(
    State(state): State<Arc<AppState>>,
    Extension(correlation): Extension<CorrelationId>,
    request: Request,
) -> ServerResult<impl IntoResponse> {
    let correlation_id = correlation.0;
    let start = Instant::now();

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let caller = auth::authenticate(auth_header.as_deref(), state.secrets.as_ref())
        .await
        .map_err(|err| ApiError::new(correlation_id, err))?;

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let declared_length: Option<usize> = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok());

    let cap = state.config.body_limit();
    let body = match to_bytes(request.into_body(), cap).await {
        Ok(body) => body,
        Err(err) => {
            let err = if is_length_limit(&err) {
                UploadError::FileTooLarge {
                    size: declared_length.unwrap_or(cap + 1),
                    limit: state.config.upload.max_file_bytes,
                }
            } else {
                UploadError::Malformed(err.to_string())
            };
            return Err(ApiError::new(correlation_id, err));
        }
    };

    let file = upload::extract(content_type.as_deref(), body)
        .await
        .map_err(|err| ApiError::new(correlation_id, err))?;

    let result = txt2json::process_upload(&file, &state.config.upload, correlation_id)
        .map_err(|err| ApiError::new(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        username = %caller.username,
        file_name = %result.file_name,
        total_lines = result.total_lines,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "conversion request completed"
    );

    Ok((StatusCode::OK, Json(result)))
}

/// Whether a body read failed on the length cap (as opposed to a
/// transport fault mid-stream).
fn is_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(current) = source {
        if current.is::<http_body_util::LengthLimitError>() {
            return true;
        }
        source = current.source();
    }
    false
}
