#[cfg(feature = "session")]
pub mod session;
pub mod user;
