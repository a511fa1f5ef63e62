//! LlmProvider trait definition.
//!
//! This is the core abstraction every completion backend implements.
//! Uses RPITIT for `complete`; [`super::box_provider::BoxLlmProvider`]
//! erases it for runtime selection.

use mentor_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for chat-completion backends (OpenRouter, test doubles, ...).
///
/// Implementations live in mentor-infra (e.g., `OpenRouterProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openrouter").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    ///
    /// The model named in `request.model` is used as-is.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}

/// Shared providers delegate to the inner value, so a caller can keep a
/// handle on a provider after boxing it.
impl<T: LlmProvider> LlmProvider for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send {
        (**self).complete(request)
    }
}
