use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr,
};

use syncsalez_auth_schema::users;
use syncsalez_domain::id::UserId;

use crate::domain::repository::UserRepository;
use crate::domain::types::UserRecord;
use crate::error::AuthServiceError;

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &UserRecord) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(user.id.0),
            email: Set(user.email.clone()),
            name: Set(user.name.clone()),
            phone_number: Set(user.phone_number.clone()),
            password: Set(user.password_hash.clone()),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(map_insert_err)?;
        Ok(())
    }
}

fn map_insert_err(e: DbErr) -> AuthServiceError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return AuthServiceError::EmailTaken;
    }
    AuthServiceError::Internal(anyhow::Error::new(e).context("insert user"))
}

fn user_from_model(m: users::Model) -> UserRecord {
    UserRecord {
        id: UserId(m.id),
        email: m.email,
        name: m.name,
        phone_number: m.phone_number,
        password_hash: m.password,
        created_at: m.created_at,
    }
}
