//! Session tokens and the gateway auth gate.
//!
//! The auth service issues tokens (feature `USE_ONLY_IN_AUTH_SERVICE`); the
//! gateway validates them on every protected route.

pub mod session;
pub mod token;
