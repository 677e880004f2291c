use std::future::Future;

use syncsalez_domain::id::StoreId;

use crate::domain::types::{Provisioning, StoreRecord};
use crate::error::StoreServiceError;

/// Persistence for stores and their authorization rows.
///
/// Futures are `Send` so bus handlers can box them onto spawned tasks.
pub trait StoreRepository: Send + Sync {
    /// Write every row of `plan` atomically: all of them or none.
    fn provision(
        &self,
        plan: &Provisioning,
    ) -> impl Future<Output = Result<(), StoreServiceError>> + Send;

    fn find_by_id(
        &self,
        id: StoreId,
    ) -> impl Future<Output = Result<Option<StoreRecord>, StoreServiceError>> + Send;

    /// Set `is_verified`. Returns the updated store, or `None` if it does not exist.
    fn mark_verified(
        &self,
        id: StoreId,
    ) -> impl Future<Output = Result<Option<StoreRecord>, StoreServiceError>> + Send;
}
