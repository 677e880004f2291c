//! Subject names and queue groups.

pub const AUTH_LOGIN: &str = "auth.login";
pub const AUTH_REGISTER: &str = "auth.register";
pub const STORE_CREATE: &str = "store.create";
pub const STORE_VERIFY: &str = "store.verify";

/// Subjects served by the auth service.
pub const AUTH_SUBJECTS: &[&str] = &[AUTH_LOGIN, AUTH_REGISTER];

/// Subjects served by the store service.
pub const STORE_SUBJECTS: &[&str] = &[STORE_CREATE, STORE_VERIFY];

pub const AUTH_QUEUE_GROUP: &str = "auth-service";
pub const STORE_QUEUE_GROUP: &str = "store-service";

/// Used when `NATS_SERVER` is unset.
pub const DEFAULT_NATS_SERVER: &str = "nats://localhost:4222";
