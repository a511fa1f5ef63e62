//! Shared domain types for Mentor.
//!
//! Messages, completion requests, chat replies, configuration and the error
//! enums used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
