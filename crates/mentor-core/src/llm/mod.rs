//! LLM provider abstractions for Mentor.
//!
//! - `LlmProvider`: RPITIT trait for concrete provider implementations
//! - `BoxLlmProvider`: Object-safe wrapper for dynamic dispatch
//! - `ModelFallback`: primary model with a single fallback attempt

pub mod box_provider;
pub mod fallback;
pub mod provider;

#[cfg(test)]
pub(crate) mod mock;
