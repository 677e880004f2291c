//! `store.*` subject handlers.

use bytes::Bytes;
use futures::future::BoxFuture;

use syncsalez_bus::messages::{CreateStoreRequest, VerifyStoreRequest};
use syncsalez_bus::reply::{Reply, ReplyError};
use syncsalez_bus::server::{Handler, respond};
use syncsalez_bus::subjects::{STORE_CREATE, STORE_VERIFY};

use crate::domain::repository::StoreRepository;
use crate::usecase::store::{CreateStoreUseCase, VerifyStoreUseCase};

/// Dispatches `store.create` and `store.verify` to the store use cases.
#[derive(Clone)]
pub struct StoreBus<R> {
    pub repo: R,
}

impl<R: StoreRepository + Clone + 'static> StoreBus<R> {
    async fn dispatch(self, subject: String, payload: Bytes) -> Bytes {
        match subject.as_str() {
            STORE_CREATE => {
                respond(&payload, |input: CreateStoreRequest| async move {
                    let usecase = CreateStoreUseCase { repo: self.repo };
                    usecase.execute(input).await.map_err(ReplyError::from)
                })
                .await
            }
            STORE_VERIFY => {
                respond(&payload, |input: VerifyStoreRequest| async move {
                    let usecase = VerifyStoreUseCase { repo: self.repo };
                    usecase.execute(input.id).await.map_err(ReplyError::from)
                })
                .await
            }
            other => {
                tracing::warn!(subject = other, "no store handler for subject");
                Reply::<()>::Err(ReplyError::unknown_subject(other)).to_bytes()
            }
        }
    }
}

impl<R: StoreRepository + Clone + 'static> Handler for StoreBus<R> {
    fn handle(&self, subject: &str, payload: Bytes) -> BoxFuture<'static, Bytes> {
        Box::pin(self.clone().dispatch(subject.to_owned(), payload))
    }
}
