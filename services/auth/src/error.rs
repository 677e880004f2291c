use axum::http::StatusCode;
use syncsalez_bus::reply::ReplyError;
use syncsalez_core::error::AppError;
use syncsalez_domain::validate::ValidationError;

/// Auth workflow error variants.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Unknown email and wrong password are indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User not found")]
    UserNotFound,
    /// Duplicate email. Surfaces as 500 like any other failed write.
    #[error("Email already registered")]
    EmailTaken,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::EmailTaken | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Only internal errors are logged here; 4xx outcomes are expected client errors.
    fn log_if_internal(&self) {
        if let Self::Internal(e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
    }
}

impl From<AuthServiceError> for ReplyError {
    fn from(e: AuthServiceError) -> Self {
        e.log_if_internal();
        ReplyError::new(e.kind(), e.status().as_u16(), e.to_string())
    }
}

impl From<AuthServiceError> for AppError {
    fn from(e: AuthServiceError) -> Self {
        e.log_if_internal();
        let message = e.to_string();
        match e {
            AuthServiceError::Validation(_) => AppError::BadRequest(message),
            AuthServiceError::InvalidCredentials => AppError::Unauthorized(message),
            AuthServiceError::UserNotFound => AppError::NotFound(message),
            AuthServiceError::EmailTaken => AppError::ConflictOrInternal(message),
            AuthServiceError::Internal(inner) => AppError::Internal(inner),
        }
    }
}
