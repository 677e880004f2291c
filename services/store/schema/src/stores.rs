use sea_orm::entity::prelude::*;

/// A vendor's store. `business_type` holds `PRODUCT` or `SERVICE`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub business_name: String,
    pub business_type: String,
    pub phone_number: Option<String>,
    pub business_email: String,
    pub business_location: Option<String>,
    pub logo: Option<String>,
    pub is_verified: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::roles::Entity")]
    Roles,
    #[sea_orm(has_many = "super::store_users::Entity")]
    StoreUsers,
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roles.def()
    }
}

impl Related<super::store_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoreUsers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
