use std::future::Future;

use crate::domain::types::UserRecord;
use crate::error::AuthServiceError;

/// Persistence for user accounts.
///
/// Futures are `Send` so bus handlers can box them onto spawned tasks.
pub trait UserRepository: Send + Sync {
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<UserRecord>, AuthServiceError>> + Send;

    /// Insert a new user. Fails with [`AuthServiceError::EmailTaken`] if the
    /// email is already registered.
    fn create(&self, user: &UserRecord)
    -> impl Future<Output = Result<(), AuthServiceError>> + Send;
}
