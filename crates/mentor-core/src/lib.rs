//! Business logic for Mentor.
//!
//! Defines the `LlmProvider` port the infrastructure layer implements, the
//! primary/fallback model routing, and the session store that bounds each
//! conversation. Depends only on `mentor-types` -- never on
//! `mentor-infra` or any HTTP crate.

pub mod chat;
pub mod llm;
