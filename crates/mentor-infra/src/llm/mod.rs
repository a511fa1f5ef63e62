//! LLM provider implementations.
//!
//! Provides the OpenRouter client and a factory ([`create_provider`]) that
//! builds it from an [`UpstreamConfig`].

pub mod openrouter;

use secrecy::SecretString;

use mentor_core::llm::box_provider::BoxLlmProvider;
use mentor_types::config::UpstreamConfig;
use mentor_types::llm::LlmError;

use self::openrouter::OpenRouterProvider;

/// Create a [`BoxLlmProvider`] for the configured upstream.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn create_provider(
    config: &UpstreamConfig,
    api_key: SecretString,
) -> Result<BoxLlmProvider, LlmError> {
    let provider =
        OpenRouterProvider::new(api_key, config.timeout_secs)?.with_base_url(config.base_url.clone());
    tracing::debug!(base_url = %provider.base_url(), timeout_secs = config.timeout_secs, "Created upstream provider");
    Ok(BoxLlmProvider::new(provider))
}
