use anyhow::Context as _;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, QueryFilter, TransactionTrait,
};

use syncsalez_domain::id::StoreId;
use syncsalez_store_schema::{permissions, roles, store_users, stores};

use crate::domain::repository::StoreRepository;
use crate::domain::types::{Provisioning, StoreRecord};
use crate::error::StoreServiceError;

#[derive(Clone)]
pub struct DbStoreRepository {
    pub db: DatabaseConnection,
}

impl StoreRepository for DbStoreRepository {
    async fn provision(&self, plan: &Provisioning) -> Result<(), StoreServiceError> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                let plan = plan.clone();
                Box::pin(async move { insert_provisioning(txn, &plan).await })
            })
            .await
            .map_err(|e| {
                StoreServiceError::ProvisioningFailed(
                    anyhow::Error::new(e).context("provision store"),
                )
            })?;
        Ok(())
    }

    async fn find_by_id(&self, id: StoreId) -> Result<Option<StoreRecord>, StoreServiceError> {
        let model = stores::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find store by id")?;
        Ok(model.map(store_from_model).transpose()?)
    }

    async fn mark_verified(&self, id: StoreId) -> Result<Option<StoreRecord>, StoreServiceError> {
        let result = stores::Entity::update_many()
            .col_expr(stores::Column::IsVerified, Expr::value(true))
            .filter(stores::Column::Id.eq(id.0))
            .exec(&self.db)
            .await
            .context("mark store verified")?;
        if result.rows_affected == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }
}

/// Store, role, membership, then permissions: each row references the previous.
async fn insert_provisioning(db: &DatabaseTransaction, plan: &Provisioning) -> Result<(), DbErr> {
    let store = &plan.store;
    stores::ActiveModel {
        id: Set(store.id.0),
        business_name: Set(store.business_name.clone()),
        business_type: Set(store.business_type.as_str().to_owned()),
        phone_number: Set(store.phone_number.clone()),
        business_email: Set(store.business_email.clone()),
        business_location: Set(store.business_location.clone()),
        logo: Set(store.logo.clone()),
        is_verified: Set(store.is_verified),
        created_at: Set(store.created_at),
    }
    .insert(db)
    .await?;

    roles::ActiveModel {
        id: Set(plan.role.id),
        name: Set(plan.role.name.clone()),
        store_id: Set(plan.role.store_id.0),
    }
    .insert(db)
    .await?;

    store_users::ActiveModel {
        id: Set(plan.store_user.id),
        user_id: Set(plan.store_user.user_id.0),
        store_id: Set(plan.store_user.store_id.0),
        role_id: Set(plan.store_user.role_id),
    }
    .insert(db)
    .await?;

    let permissions = plan.permissions.iter().map(|p| permissions::ActiveModel {
        id: Set(p.id),
        role_id: Set(p.role_id),
        name: Set(p.name.as_str().to_owned()),
        value: Set(p.value),
    });
    permissions::Entity::insert_many(permissions).exec(db).await?;
    Ok(())
}

fn store_from_model(m: stores::Model) -> anyhow::Result<StoreRecord> {
    Ok(StoreRecord {
        id: StoreId(m.id),
        business_type: m
            .business_type
            .parse()
            .with_context(|| format!("store {} has a corrupt business type", m.id))?,
        business_name: m.business_name,
        phone_number: m.phone_number,
        business_email: m.business_email,
        business_location: m.business_location,
        logo: m.logo,
        is_verified: m.is_verified,
        created_at: m.created_at,
    })
}
