pub mod config;
pub mod domain;
pub mod error;
#[cfg(feature = "session")]
pub mod handlers;
pub mod infra;
pub mod router;
pub mod state;
pub mod usecase;
