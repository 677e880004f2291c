//! In-process [`Relay`]: dispatches straight to registered [`Handler`]s.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use futures::future::BoxFuture;

use crate::relay::{Relay, RelayError};
use crate::server::Handler;

#[derive(Clone, Default)]
pub struct LocalRelay {
    routes: HashMap<String, Arc<dyn Handler>>,
}

impl LocalRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to every subject in `subjects`.
    pub fn mount<H: Handler>(mut self, subjects: &[&str], handler: H) -> Self {
        let handler: Arc<dyn Handler> = Arc::new(handler);
        for subject in subjects {
            self.routes.insert((*subject).to_owned(), Arc::clone(&handler));
        }
        self
    }
}

impl Relay for LocalRelay {
    fn request<'a>(
        &'a self,
        subject: &'a str,
        payload: Bytes,
    ) -> BoxFuture<'a, Result<Bytes, RelayError>> {
        Box::pin(async move {
            let handler = self
                .routes
                .get(subject)
                .ok_or_else(|| RelayError::NoResponders(subject.to_owned()))?;
            Ok(handler.handle(subject, payload).await)
        })
    }
}
