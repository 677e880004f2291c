//! Service side of the bus: subscribe, dispatch, reply once.

use std::future::Future;
use std::sync::Arc;

use async_nats::Client;
use bytes::Bytes;
use futures::StreamExt;
use futures::future::BoxFuture;
use serde::{Serialize, de::DeserializeOwned};

use crate::reply::{Reply, ReplyError};

/// A backend's dispatch table: maps a subject + raw payload to an encoded reply.
///
/// Implementations never fail; errors are encoded as `Reply::Err`.
pub trait Handler: Send + Sync + 'static {
    fn handle(&self, subject: &str, payload: Bytes) -> BoxFuture<'static, Bytes>;
}

/// Decode `payload` as `Req`, run `f`, encode the outcome as a [`Reply`].
pub async fn respond<Req, Resp, F, Fut>(payload: &[u8], f: F) -> Bytes
where
    Req: DeserializeOwned,
    Resp: Serialize,
    F: FnOnce(Req) -> Fut,
    Fut: Future<Output = Result<Resp, ReplyError>>,
{
    let reply: Reply<Resp> = match serde_json::from_slice::<Req>(payload) {
        Ok(request) => f(request).await.into(),
        Err(e) => Reply::Err(ReplyError::invalid_payload(e)),
    };
    reply.to_bytes()
}

/// Serve `subjects` in `queue_group` until the subscriptions close.
///
/// Every message is handled on its own task and answered on its reply subject.
pub async fn serve<H: Handler>(
    client: Client,
    queue_group: &str,
    subjects: &[&str],
    handler: H,
) -> Result<(), async_nats::SubscribeError> {
    let handler = Arc::new(handler);

    let mut subscriptions = Vec::with_capacity(subjects.len());
    for subject in subjects {
        let subscriber = client
            .queue_subscribe((*subject).to_owned(), queue_group.to_owned())
            .await?;
        tracing::info!(subject, queue_group, "subscribed");
        subscriptions.push(subscriber);
    }

    let mut messages = futures::stream::select_all(subscriptions);
    while let Some(message) = messages.next().await {
        let Some(reply_to) = message.reply.clone() else {
            tracing::warn!(subject = %message.subject, "dropping message without reply subject");
            continue;
        };
        let handler = Arc::clone(&handler);
        let client = client.clone();
        tokio::spawn(async move {
            let response = handler
                .handle(message.subject.as_str(), message.payload)
                .await;
            if let Err(e) = client.publish(reply_to, response).await {
                tracing::error!(error = %e, subject = %message.subject, "failed to publish reply");
            }
        });
    }

    tracing::warn!(queue_group, "subscriptions closed");
    Ok(())
}
