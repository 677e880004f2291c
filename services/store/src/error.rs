use axum::http::StatusCode;
use syncsalez_bus::reply::ReplyError;
use syncsalez_domain::validate::ValidationError;

/// Store workflow error variants.
#[derive(Debug, thiserror::Error)]
pub enum StoreServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Store not found")]
    StoreNotFound,
    /// One of the provisioning inserts failed; the transaction was rolled back.
    #[error("Store provisioning failed")]
    ProvisioningFailed(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl StoreServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::StoreNotFound => "STORE_NOT_FOUND",
            Self::ProvisioningFailed(_) => "PROVISIONING_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::StoreNotFound => StatusCode::NOT_FOUND,
            Self::ProvisioningFailed(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreServiceError> for ReplyError {
    fn from(e: StoreServiceError) -> Self {
        match &e {
            StoreServiceError::ProvisioningFailed(cause) | StoreServiceError::Internal(cause) => {
                tracing::error!(error = ?cause, kind = e.kind(), "store workflow failed");
            }
            _ => {}
        }
        ReplyError::new(e.kind(), e.status().as_u16(), e.to_string())
    }
}
