//! Request/reply contract between the gateway and the backend workflows.
//!
//! Requests travel as JSON on named subjects; every request gets exactly one
//! [`reply::Reply`]. The transport is NATS in production ([`relay::NatsRelay`],
//! [`server::serve`]) and in-process in tests ([`local::LocalRelay`]).

pub mod local;
pub mod messages;
pub mod relay;
pub mod reply;
pub mod server;
pub mod subjects;
