//! Infrastructure layer for Mentor.
//!
//! Contains the OpenRouter implementation of the `LlmProvider` trait
//! defined in `mentor-core`, and the `mentor.toml` configuration loader.

pub mod config;
pub mod llm;
