//! HTTP layer for Mentor.
//!
//! Axum routes for the chat relay (`/chat`), health and connectivity
//! checks, and the static front-end.

pub mod error;
pub mod handlers;
pub mod router;
