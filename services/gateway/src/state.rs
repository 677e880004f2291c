use std::sync::Arc;

use syncsalez_auth_types::session::SessionKey;
use syncsalez_bus::relay::Relay;

/// Shared gateway state: the bus client and the token-verification key.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<dyn Relay>,
    pub session_key: SessionKey,
}
