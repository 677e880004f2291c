//! Client side of the bus: send a request, await its single reply.

use async_nats::{Client, RequestError, RequestErrorKind};
use bytes::Bytes;
use futures::future::BoxFuture;
use serde::{Serialize, de::DeserializeOwned};

use crate::reply::{Reply, ReplyError};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("no responders for subject {0}")]
    NoResponders(String),
    #[error("request timed out")]
    Timeout,
    #[error("relay transport error: {0}")]
    Transport(String),
    #[error("malformed relay message: {0}")]
    Codec(#[from] serde_json::Error),
    /// The handling service answered with an error reply.
    #[error("{}", .0.message)]
    Remote(ReplyError),
}

/// Request/reply transport. Object safe so the gateway can hold `Arc<dyn Relay>`.
pub trait Relay: Send + Sync {
    fn request<'a>(
        &'a self,
        subject: &'a str,
        payload: Bytes,
    ) -> BoxFuture<'a, Result<Bytes, RelayError>>;
}

/// Encode `request`, send it on `subject`, decode the reply.
pub async fn send<Req, Resp>(
    relay: &dyn Relay,
    subject: &str,
    request: &Req,
) -> Result<Resp, RelayError>
where
    Req: Serialize,
    Resp: DeserializeOwned,
{
    let payload = Bytes::from(serde_json::to_vec(request)?);
    let raw = relay.request(subject, payload).await?;
    Reply::<Resp>::from_slice(&raw)?
        .into_result()
        .map_err(RelayError::Remote)
}

/// [`Relay`] over NATS core request/reply.
#[derive(Clone)]
pub struct NatsRelay {
    client: Client,
}

impl NatsRelay {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn connect(url: &str) -> Result<Self, async_nats::ConnectError> {
        Ok(Self::new(async_nats::connect(url).await?))
    }
}

impl Relay for NatsRelay {
    fn request<'a>(
        &'a self,
        subject: &'a str,
        payload: Bytes,
    ) -> BoxFuture<'a, Result<Bytes, RelayError>> {
        Box::pin(async move {
            let message = self
                .client
                .request(subject.to_owned(), payload)
                .await
                .map_err(|e| relay_error(subject, e))?;
            Ok(message.payload)
        })
    }
}

fn relay_error(subject: &str, e: RequestError) -> RelayError {
    match e.kind() {
        RequestErrorKind::NoResponders => RelayError::NoResponders(subject.to_owned()),
        RequestErrorKind::TimedOut => RelayError::Timeout,
        _ => RelayError::Transport(e.to_string()),
    }
}
