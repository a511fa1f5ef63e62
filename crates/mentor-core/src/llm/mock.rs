//! Scripted provider for unit tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use mentor_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use super::provider::LlmProvider;

#[derive(Clone)]
pub enum MockOutcome {
    Reply(String),
    Auth,
    RateLimited,
    Provider(String),
    Timeout,
}

/// Answers per model name; unknown models fail with a provider error.
pub struct MockProvider {
    outcomes: HashMap<String, MockOutcome>,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            outcomes: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, model: &str, outcome: MockOutcome) -> Self {
        self.outcomes.insert(model.to_string(), outcome);
        self
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, LlmError>> + Send {
        self.calls.lock().unwrap().push(request.clone());
        let outcome = self
            .outcomes
            .get(&request.model)
            .cloned()
            .unwrap_or_else(|| MockOutcome::Provider(format!("unknown model {}", request.model)));
        let model = request.model.clone();
        async move {
            match outcome {
                MockOutcome::Reply(content) => Ok(CompletionResponse {
                    id: format!("resp-{model}"),
                    content,
                    model,
                    usage: Usage {
                        input_tokens: 10,
                        output_tokens: 20,
                    },
                }),
                MockOutcome::Auth => Err(LlmError::AuthenticationFailed),
                MockOutcome::RateLimited => Err(LlmError::RateLimited {
                    retry_after_ms: None,
                }),
                MockOutcome::Provider(message) => Err(LlmError::Provider { message }),
                MockOutcome::Timeout => Err(LlmError::Timeout(60)),
            }
        }
    }
}
