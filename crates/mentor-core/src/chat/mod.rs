//! Conversation state and the chat turn.
//!
//! - `history`: bounded, system-first message log
//! - `store`: per-session histories with per-key locking
//! - `service`: the turn driver used by the HTTP layer

pub mod history;
pub mod service;
pub mod store;
