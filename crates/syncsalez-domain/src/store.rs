//! Store provisioning DTOs and the fixed admin permission set.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::StoreId;
use crate::validate::{ValidationError, require_email, require_non_empty};

/// Name of the role granted to a store's creator.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessType {
    Product,
    Service,
}

impl BusinessType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Product => "PRODUCT",
            Self::Service => "SERVICE",
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored string is not a known enum value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for BusinessType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRODUCT" => Ok(Self::Product),
            "SERVICE" => Ok(Self::Service),
            other => Err(UnknownVariant {
                kind: "business type",
                value: other.to_owned(),
            }),
        }
    }
}

/// Store-scoped capabilities a role can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionName {
    ViewStore,
    ManageUsers,
    ViewInventory,
    EditInventory,
    ViewOrders,
    EditOrders,
}

impl PermissionName {
    /// Every permission, in the order they are granted to a new admin role.
    pub const ALL: [PermissionName; 6] = [
        Self::ViewStore,
        Self::ManageUsers,
        Self::ViewInventory,
        Self::EditInventory,
        Self::ViewOrders,
        Self::EditOrders,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ViewStore => "VIEW_STORE",
            Self::ManageUsers => "MANAGE_USERS",
            Self::ViewInventory => "VIEW_INVENTORY",
            Self::EditInventory => "EDIT_INVENTORY",
            Self::ViewOrders => "VIEW_ORDERS",
            Self::EditOrders => "EDIT_ORDERS",
        }
    }
}

impl fmt::Display for PermissionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionName {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "permission",
                value: s.to_owned(),
            })
    }
}

/// `CreateStoreDto`: body of `POST /stores/create-store`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStore {
    pub business_name: String,
    pub business_type: BusinessType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub business_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl CreateStore {
    /// `businessType` is already constrained by deserialization.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("businessName", &self.business_name)?;
        require_email("businessEmail", &self.business_email)
    }
}

/// Store fields returned by `store.create` and `store.verify`.
///
/// Carries no role or permission detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSummary {
    pub id: StoreId,
    pub business_name: String,
    pub business_type: BusinessType,
    pub phone_number: Option<String>,
    pub business_email: String,
    pub business_location: Option<String>,
    pub logo: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}
