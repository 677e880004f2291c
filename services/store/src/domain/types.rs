use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use syncsalez_domain::id::{StoreId, UserId};
use syncsalez_domain::store::{
    ADMIN_ROLE, BusinessType, CreateStore, PermissionName, StoreSummary,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRecord {
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

impl StoreRecord {
    pub fn summary(&self) -> StoreSummary {
        StoreSummary {
            id: self.id,
            business_name: self.business_name.clone(),
            business_type: self.business_type,
            phone_number: self.phone_number.clone(),
            business_email: self.business_email.clone(),
            business_location: self.business_location.clone(),
            logo: self.logo.clone(),
            is_verified: self.is_verified,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRecord {
    pub id: Uuid,
    pub name: String,
    pub store_id: StoreId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreUserRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub store_id: StoreId,
    pub role_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionRecord {
    pub id: Uuid,
    pub role_id: Uuid,
    pub name: PermissionName,
    pub value: bool,
}

/// Every row written when a store is created, in insert order.
#[derive(Debug, Clone)]
pub struct Provisioning {
    pub store: StoreRecord,
    pub role: RoleRecord,
    pub store_user: StoreUserRecord,
    pub permissions: Vec<PermissionRecord>,
}

impl Provisioning {
    /// A new unverified store whose creator holds an admin role with every
    /// permission granted.
    pub fn admin_store(input: CreateStore, creator: UserId) -> Self {
        let store = StoreRecord {
            id: StoreId::generate(),
            business_name: input.business_name,
            business_type: input.business_type,
            phone_number: input.phone_number,
            business_email: input.business_email,
            business_location: input.business_location,
            logo: input.logo,
            is_verified: false,
            // timestamptz keeps microseconds; match it so re-read rows compare equal.
            created_at: Utc::now().trunc_subsecs(6),
        };
        let role = RoleRecord {
            id: Uuid::now_v7(),
            name: ADMIN_ROLE.to_owned(),
            store_id: store.id,
        };
        let store_user = StoreUserRecord {
            id: Uuid::now_v7(),
            user_id: creator,
            store_id: store.id,
            role_id: role.id,
        };
        let permissions = PermissionName::ALL
            .into_iter()
            .map(|name| PermissionRecord {
                id: Uuid::now_v7(),
                role_id: role.id,
                name,
                value: true,
            })
            .collect();
        Self {
            store,
            role,
            store_user,
            permissions,
        }
    }
}
