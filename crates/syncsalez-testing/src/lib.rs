//! Test utilities for SyncSalez services.
//!
//! Signed bearer headers for the auth gate and a recording stub relay.
//! Import from tests only, never from production code.

pub mod auth;
pub mod relay;
