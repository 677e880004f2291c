//! bcrypt hashing, run on the blocking pool.

use std::sync::LazyLock;

use anyhow::Context as _;

use crate::domain::types::BCRYPT_COST;
use crate::error::AuthServiceError;

pub async fn hash_password(password: String) -> Result<String, AuthServiceError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .context("join password hashing task")?
        .context("hash password")?;
    Ok(hash)
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, AuthServiceError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .context("join password verification task")?
        .context("verify password")?;
    Ok(matches)
}

static DECOY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| bcrypt::hash("decoy-password", BCRYPT_COST).ok());

/// Spend one bcrypt verification when there is no stored hash, so an unknown
/// email costs the same as a wrong password.
///
/// The decoy hash is built lazily, on the blocking pool like every other bcrypt call.
pub async fn verify_against_decoy(password: String) {
    let outcome = tokio::task::spawn_blocking(move || {
        DECOY_HASH
            .as_deref()
            .map(|hash| bcrypt::verify(password, hash))
    })
    .await;
    if let Err(e) = outcome {
        tracing::warn!(error = %e, "decoy verification task failed");
    }
}
