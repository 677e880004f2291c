//! Gateway auth gate: bearer-token check in front of protected routes.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use http::HeaderMap;
use http::request::Parts;

use syncsalez_core::error::AppError;

use crate::token::{Identity, TokenError, validate_session_token};

/// HMAC secret used to verify session tokens.
#[derive(Clone)]
pub struct SessionKey(Arc<str>);

impl SessionKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Arc::from(secret.into()))
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionKey(..)")
    }
}

/// Resolve the caller's identity from an `Authorization: Bearer` header.
pub fn authenticate(headers: &HeaderMap, key: &SessionKey) -> Result<Identity, AppError> {
    let bearer = headers
        .typed_get::<Authorization<Bearer>>()
        .ok_or_else(|| AppError::Unauthorized("Invalid or missing token".to_owned()))?;

    validate_session_token(bearer.token(), key.secret()).map_err(|e| match e {
        TokenError::Expired => AppError::Unauthorized("Token expired".to_owned()),
        TokenError::InvalidSignature | TokenError::Malformed => {
            AppError::Unauthorized("Invalid or missing token".to_owned())
        }
    })
}

/// Middleware for protected routes.
///
/// Apply with `axum::middleware::from_fn_with_state(key, require_session)`.
/// On success the [`Identity`] is stored in request extensions; on failure the
/// request is answered with 401 and the inner handler never runs.
pub async fn require_session(
    State(key): State<SessionKey>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let identity = authenticate(request.headers(), &key)?;
    tracing::debug!(user_id = %identity.user_id, "session accepted");
    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Handlers behind [`require_session`] take `identity: Identity` directly.
/// Outside the gate, extraction fails with 401.
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    // axum-core 0.5 declares `fn -> impl Future + Send`; resolve synchronously and
    // return a 'static block so no borrow of `parts` is captured.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = parts.extensions.get::<Identity>().cloned();
        async move {
            identity.ok_or_else(|| AppError::Unauthorized("Invalid or missing token".to_owned()))
        }
    }
}
