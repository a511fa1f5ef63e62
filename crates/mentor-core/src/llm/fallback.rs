//! Primary/fallback model routing.
//!
//! A chat turn first asks the primary (free-tier) model. Any failure --
//! transport, timeout, non-2xx status, unparseable body -- is logged and the
//! same request is sent exactly once to the fallback model. If that fails
//! too, both errors are returned together as
//! [`LlmError::FallbackExhausted`]. There is no backoff and no further retry.

use tracing::Instrument;

use mentor_types::chat::Attempt;
use mentor_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use super::box_provider::BoxLlmProvider;

/// Result of a successful completion through the fallback sequence.
#[derive(Debug)]
pub struct FallbackResult {
    /// The completion response from the provider.
    pub response: CompletionResponse,
    /// Model identifier that produced the response.
    pub model: String,
    /// Which attempt succeeded.
    pub attempt: Attempt,
    /// Why the primary attempt was abandoned, when the fallback answered.
    pub primary_error: Option<LlmError>,
}

/// Routes completion requests to a primary model with a single fallback.
///
/// Stateless between calls: nothing about a failed attempt is remembered,
/// so every request starts again at the primary model.
#[derive(Debug)]
pub struct ModelFallback {
    provider: BoxLlmProvider,
    primary_model: String,
    fallback_model: String,
}

impl ModelFallback {
    pub fn new(
        provider: BoxLlmProvider,
        primary_model: impl Into<String>,
        fallback_model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            primary_model: primary_model.into(),
            fallback_model: fallback_model.into(),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn primary_model(&self) -> &str {
        &self.primary_model
    }

    pub fn fallback_model(&self) -> &str {
        &self.fallback_model
    }

    /// Send a completion request through the fallback sequence.
    ///
    /// `request.model` is ignored; each attempt targets its own model with
    /// the same messages and generation parameters.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<FallbackResult, LlmError> {
        let primary_error = match self.attempt(request, &self.primary_model).await {
            Ok(response) => {
                return Ok(FallbackResult {
                    response,
                    model: self.primary_model.clone(),
                    attempt: Attempt::Primary,
                    primary_error: None,
                });
            }
            Err(err) => err,
        };

        tracing::warn!(
            primary = %self.primary_model,
            fallback = %self.fallback_model,
            error = %primary_error,
            "Primary model failed, retrying with fallback model"
        );

        match self.attempt(request, &self.fallback_model).await {
            Ok(response) => Ok(FallbackResult {
                response,
                model: self.fallback_model.clone(),
                attempt: Attempt::Fallback,
                primary_error: Some(primary_error),
            }),
            Err(fallback_error) => {
                tracing::error!(
                    fallback = %self.fallback_model,
                    error = %fallback_error,
                    "Fallback model failed, giving up"
                );
                Err(LlmError::FallbackExhausted {
                    primary: Box::new(primary_error),
                    fallback: Box::new(fallback_error),
                })
            }
        }
    }

    /// Send a request to one model, bypassing the fallback.
    pub async fn complete_with(
        &self,
        request: &CompletionRequest,
        model: &str,
    ) -> Result<CompletionResponse, LlmError> {
        self.attempt(request, model).await
    }

    async fn attempt(
        &self,
        request: &CompletionRequest,
        model: &str,
    ) -> Result<CompletionResponse, LlmError> {
        let request = request.with_model(model);

        let span = tracing::info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
        );

        let response = self.provider.complete(&request).instrument(span).await?;
        tracing::debug!(
            model,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "Completion received"
        );
        Ok(response)
    }
}
