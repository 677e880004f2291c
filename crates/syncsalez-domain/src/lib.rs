//! Domain types shared across all SyncSalez services.
//!
//! This crate contains only pure types with no framework dependencies:
//! identifiers, request/response DTOs and their boundary validation.

pub mod id;
pub mod store;
pub mod user;
pub mod validate;
