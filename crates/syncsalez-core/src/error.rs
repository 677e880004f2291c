use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// JSON body returned for every failed HTTP request.
///
/// `error` carries the canonical reason phrase of `statusCode`
/// (e.g. `"Unauthorized"`), `message` the human-readable cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub status_code: u16,
    pub message: String,
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            error: status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_owned(),
        }
    }
}

/// Common application error variants, rendered as an [`ErrorEnvelope`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    /// Write rejected by the store (e.g. a duplicate key). Reported as 500
    /// with the cause kept visible.
    #[error("{0}")]
    ConflictOrInternal(String),
    /// Failure reported by a downstream service or the transport reaching it.
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ConflictOrInternal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Malformed or mistyped JSON bodies are client errors, whatever axum's own status.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 5xx only; TraceLayer records method, uri and status for every request.
        match &self {
            Self::Internal(e) => tracing::error!(error = ?e, "internal error"),
            Self::ConflictOrInternal(message) => {
                tracing::error!(error = %message, "write conflict")
            }
            Self::Upstream { message, .. } if status.is_server_error() => {
                tracing::error!(error = %message, status = status.as_u16(), "upstream error")
            }
            _ => {}
        }
        let body = ErrorEnvelope::new(status, self.to_string());
        (status, axum::Json(body)).into_response()
    }
}
