//! HTTP surface of Mentor.
//!
//! Exposes the router and application state so the `mentor` binary and the
//! integration tests build the exact same service.

pub mod http;
pub mod state;
