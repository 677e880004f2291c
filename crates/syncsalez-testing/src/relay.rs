//! Stub [`Relay`] with canned replies and a call log.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use futures::future::BoxFuture;
use serde::Serialize;
use serde_json::Value;

use syncsalez_bus::relay::{Relay, RelayError};
use syncsalez_bus::reply::{Reply, ReplyError};

/// One request seen by [`StubRelay`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub subject: String,
    pub payload: Value,
}

/// Replies with whatever was registered for a subject; unknown subjects get
/// `NoResponders`. Clones share the call log.
#[derive(Clone, Default)]
pub struct StubRelay {
    replies: HashMap<String, Bytes>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl StubRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_ok<T: Serialize>(mut self, subject: &str, value: T) -> Self {
        self.replies
            .insert(subject.to_owned(), Reply::Ok(value).to_bytes());
        self
    }

    pub fn reply_err(mut self, subject: &str, error: ReplyError) -> Self {
        self.replies
            .insert(subject.to_owned(), Reply::<()>::Err(error).to_bytes());
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

impl Relay for StubRelay {
    fn request<'a>(
        &'a self,
        subject: &'a str,
        payload: Bytes,
    ) -> BoxFuture<'a, Result<Bytes, RelayError>> {
        Box::pin(async move {
            let payload = serde_json::from_slice(&payload)?;
            self.calls
                .lock()
                .expect("call log poisoned")
                .push(RecordedCall {
                    subject: subject.to_owned(),
                    payload,
                });
            self.replies
                .get(subject)
                .cloned()
                .ok_or_else(|| RelayError::NoResponders(subject.to_owned()))
        })
    }
}
