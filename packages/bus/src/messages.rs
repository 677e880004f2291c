//! Payloads that exist only on the bus. Plain DTOs live in `syncsalez-domain`.

use serde::{Deserialize, Serialize};

use syncsalez_domain::id::{StoreId, UserId};
use syncsalez_domain::store::CreateStore;

/// `store.create` payload: the validated DTO plus the authenticated creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoreRequest {
    pub create_store_dto: CreateStore,
    pub user_id: UserId,
}

/// `store.verify` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyStoreRequest {
    pub id: StoreId,
}
