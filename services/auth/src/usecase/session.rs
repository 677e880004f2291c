use anyhow::Context as _;

use syncsalez_auth_types::token::issue_session_token;
use syncsalez_domain::user::{LoginCredentials, SessionToken};

use crate::domain::repository::UserRepository;
use crate::error::AuthServiceError;
use crate::infra::password::{verify_against_decoy, verify_password};

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginCredentials) -> Result<SessionToken, AuthServiceError> {
        input.validate()?;

        let Some(user) = self.repo.find_by_email(&input.email).await? else {
            verify_against_decoy(input.password).await;
            return Err(AuthServiceError::InvalidCredentials);
        };

        if !verify_password(input.password, user.password_hash.clone()).await? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let (access_token, _exp) = issue_session_token(user.id, &user.email, &self.jwt_secret)
            .context("sign session token")?;

        tracing::info!(user_id = %user.id, "session issued");
        Ok(SessionToken { access_token })
    }
}
