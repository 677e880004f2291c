//! `auth.*` subject handlers.

use bytes::Bytes;
use futures::future::BoxFuture;

use syncsalez_bus::reply::{Reply, ReplyError};
use syncsalez_bus::server::{Handler, respond};
use syncsalez_bus::subjects::{AUTH_LOGIN, AUTH_REGISTER};
use syncsalez_domain::user::{LoginCredentials, RegisterUser};

use crate::domain::repository::UserRepository;
use crate::usecase::session::LoginUseCase;
use crate::usecase::user::RegisterUseCase;

/// Dispatches `auth.login` and `auth.register` to the auth use cases.
#[derive(Clone)]
pub struct AuthBus<R> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: UserRepository + Clone + 'static> AuthBus<R> {
    async fn dispatch(self, subject: String, payload: Bytes) -> Bytes {
        match subject.as_str() {
            AUTH_LOGIN => {
                respond(&payload, |input: LoginCredentials| async move {
                    let usecase = LoginUseCase {
                        repo: self.repo,
                        jwt_secret: self.jwt_secret,
                    };
                    usecase.execute(input).await.map_err(ReplyError::from)
                })
                .await
            }
            AUTH_REGISTER => {
                respond(&payload, |input: RegisterUser| async move {
                    let usecase = RegisterUseCase { repo: self.repo };
                    usecase.execute(input).await.map_err(ReplyError::from)
                })
                .await
            }
            other => {
                tracing::warn!(subject = other, "no auth handler for subject");
                Reply::<()>::Err(ReplyError::unknown_subject(other)).to_bytes()
            }
        }
    }
}

impl<R: UserRepository + Clone + 'static> Handler for AuthBus<R> {
    fn handle(&self, subject: &str, payload: Bytes) -> BoxFuture<'static, Bytes> {
        Box::pin(self.clone().dispatch(subject.to_owned(), payload))
    }
}
