//! Reply envelope: `{"ok": <payload>}` or `{"err": {kind, status, message}}`.

use bytes::Bytes;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Failure reported by the service that handled a request.
///
/// `status` is the HTTP status the gateway should surface; `kind` is the
/// service's stable error code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ReplyError {
    pub kind: String,
    pub status: u16,
    pub message: String,
}

impl ReplyError {
    pub fn new(kind: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            status,
            message: message.into(),
        }
    }

    pub fn invalid_payload(cause: impl std::fmt::Display) -> Self {
        Self::new("INVALID_PAYLOAD", 400, format!("invalid payload: {cause}"))
    }

    pub fn unknown_subject(subject: &str) -> Self {
        Self::new("UNKNOWN_SUBJECT", 404, format!("no handler for {subject}"))
    }

    pub fn internal() -> Self {
        Self::new("INTERNAL", 500, "internal error")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reply<T> {
    Ok(T),
    Err(ReplyError),
}

impl<T> Reply<T> {
    pub fn into_result(self) -> Result<T, ReplyError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(e) => Err(e),
        }
    }
}

impl<T> From<Result<T, ReplyError>> for Reply<T> {
    fn from(result: Result<T, ReplyError>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(e) => Self::Err(e),
        }
    }
}

impl<T: Serialize> Reply<T> {
    pub fn to_bytes(&self) -> Bytes {
        match serde_json::to_vec(self) {
            Ok(buf) => Bytes::from(buf),
            Err(e) => {
                tracing::error!(error = %e, "failed to encode reply");
                let fallback = Reply::<()>::Err(ReplyError::internal());
                // A unit payload with string fields always encodes.
                Bytes::from(serde_json::to_vec(&fallback).unwrap_or_default())
            }
        }
    }
}

impl<T: DeserializeOwned> Reply<T> {
    pub fn from_slice(raw: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(raw)
    }
}
