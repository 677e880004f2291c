//! sea-orm entities owned by the store service.

pub mod permissions;
pub mod roles;
pub mod store_users;
pub mod stores;
