//! Cross-cutting plumbing shared by every SyncSalez binary.
//!
//! HTTP error envelope, health probes, request ids, and tracing setup.

pub mod error;
pub mod health;
pub mod middleware;
pub mod tracing;
