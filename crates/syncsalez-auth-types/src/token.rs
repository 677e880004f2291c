//! Session-token (JWT) issue and validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test))]
use serde::Serialize;
use uuid::Uuid;

use syncsalez_domain::id::UserId;

/// Session-token lifetime in seconds (365 days).
pub const SESSION_TOKEN_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Identity extracted from a validated session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub email: String,
    pub exp: u64,
}

/// Errors returned by [`validate_session_token`].
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload shared by token creation (auth service) and validation (gateway).
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `email` | custom | login email |
/// | `sub` | `sub` | user ID (UUID string) |
/// | `exp` | `exp` | expiration, seconds since UNIX epoch |
///
/// [`Serialize`] requires the **`USE_ONLY_IN_AUTH_SERVICE`** feature: the auth
/// service is the sole token issuer.
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test), derive(Serialize))]
pub struct SessionClaims {
    pub email: String,
    pub sub: String,
    pub exp: u64,
}

/// HS256, `exp` checked with the default 60s leeway, `exp` + `sub` required.
fn decode_jwt(token: &str, secret: &str) -> Result<SessionClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    Ok(data.claims)
}

/// Validate a bearer token value, returning the embedded identity.
pub fn validate_session_token(token: &str, secret: &str) -> Result<Identity, TokenError> {
    let claims = decode_jwt(token, secret)?;
    let user_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| TokenError::Malformed)?;
    Ok(Identity {
        user_id: UserId(user_id),
        email: claims.email,
        exp: claims.exp,
    })
}

#[cfg(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test))]
fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Sign a session token for `user_id` that expires at `exp` (UNIX seconds).
#[cfg(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test))]
pub fn issue_session_token_expiring_at(
    user_id: UserId,
    email: &str,
    exp: u64,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    use jsonwebtoken::{EncodingKey, Header, encode};

    let claims = SessionClaims {
        email: email.to_owned(),
        sub: user_id.to_string(),
        exp,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Sign a session token valid for [`SESSION_TOKEN_TTL_SECS`]. Returns `(token, exp)`.
#[cfg(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test))]
pub fn issue_session_token(
    user_id: UserId,
    email: &str,
    secret: &str,
) -> Result<(String, u64), jsonwebtoken::errors::Error> {
    let exp = now_secs() + SESSION_TOKEN_TTL_SECS;
    let token = issue_session_token_expiring_at(user_id, email, exp, secret)?;
    Ok((token, exp))
}
