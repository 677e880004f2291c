use chrono::Utc;

use syncsalez_domain::id::UserId;
use syncsalez_domain::user::{RegisterUser, UserSummary};

use crate::domain::repository::UserRepository;
use crate::domain::types::UserRecord;
use crate::error::AuthServiceError;
use crate::infra::password::hash_password;

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUseCase<R> {
    pub async fn execute(&self, input: RegisterUser) -> Result<UserSummary, AuthServiceError> {
        input.validate()?;
        let password_hash = hash_password(input.password).await?;
        let user = UserRecord {
            id: UserId::generate(),
            email: input.email,
            name: input.name,
            phone_number: input.phone_number,
            password_hash,
            created_at: Utc::now(),
        };
        self.repo.create(&user).await?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user.summary())
    }
}

// ── FindUserByEmail ──────────────────────────────────────────────────────────

pub struct FindUserByEmailUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> FindUserByEmailUseCase<R> {
    pub async fn execute(&self, email: &str) -> Result<UserSummary, AuthServiceError> {
        self.repo
            .find_by_email(email)
            .await?
            .map(|user| user.summary())
            .ok_or(AuthServiceError::UserNotFound)
    }
}
