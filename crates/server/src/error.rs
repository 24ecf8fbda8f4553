use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use auth::AuthError;
use upload::UploadError;

pub type ServerResult<T> = Result<T, ApiError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("{0}")]
    Upload(#[from] UploadError),

    #[error("internal server error")]
    Internal(String),

    #[error("not found")]
    NotFound,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Auth(_) => StatusCode::UNAUTHORIZED,
            ServerError::Upload(err) => StatusCode::from_u16(err.http_status_code())
                .unwrap_or(StatusCode::BAD_REQUEST),
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Error category string used as the envelope's `error` field
    fn category(&self) -> &'static str {
        match self {
            ServerError::Auth(_) => "Unauthorized",
            ServerError::Upload(UploadError::FileTooLarge { .. }) => "Payload Too Large",
            ServerError::Upload(_) => "Bad Request",
            ServerError::Internal(_) => "Internal Server Error",
            ServerError::NotFound => "Not Found",
        }
    }

    /// Message safe to hand to the client. Internal faults stay
    /// generic; the detail is logged server-side only.
    fn client_message(&self) -> String {
        match self {
            ServerError::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Error response body: same shape for every failing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub error: String,
    pub message: String,
    pub correlation_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

/// A [`ServerError`] bound to the request's correlation id, so the
/// envelope and the `X-Correlation-ID` header always carry the id
/// minted at request entry.
#[derive(Debug)]
pub struct ApiError {
    pub correlation_id: Uuid,
    pub error: ServerError,
}

impl ApiError {
    pub fn new(correlation_id: Uuid, error: impl Into<ServerError>) -> Self {
        Self {
            correlation_id,
            error: error.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();

        if let ServerError::Internal(detail) = &self.error {
            // Full detail server-side; never in the client response.
            tracing::error!(
                correlation_id = %self.correlation_id,
                detail = %detail,
                "internal server error"
            );
        } else {
            tracing::warn!(
                correlation_id = %self.correlation_id,
                status = %status,
                error = %self.error,
                "request failed"
            );
        }

        let envelope = ErrorEnvelope {
            error: self.error.category().to_string(),
            message: self.error.client_message(),
            correlation_id: self.correlation_id,
            timestamp: Utc::now(),
        };

        let mut response = (status, Json(envelope)).into_response();
        if let Ok(value) = HeaderValue::from_str(&self.correlation_id.to_string()) {
            response.headers_mut().insert("x-correlation-id", value);
        }
        response
    }
}
