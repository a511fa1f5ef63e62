//! Chat turn driver.
//!
//! `ChatService` ties the session store to the model fallback:
//! validate -> lock session -> complete -> append user/assistant -> trim.
//! History is only mutated after a successful completion, so a failed or
//! cancelled turn leaves the session exactly as it was.

use mentor_types::chat::{resolve_session_id, Attempt, ChatReply};
use mentor_types::config::ChatConfig;
use mentor_types::error::ChatError;
use mentor_types::llm::{CompletionRequest, LlmError, Message, MessageRole};

use crate::llm::fallback::ModelFallback;

use super::store::SessionStore;

/// Validation message for a blank chat message.
pub const EMPTY_MESSAGE: &str = "El mensaje no puede estar vacío";

/// Prompt sent by the connectivity probe.
pub const PROBE_PROMPT: &str = "Di 'hola' en español";
const PROBE_TEMPERATURE: f64 = 0.1;
const PROBE_MAX_TOKENS: u32 = 10;

/// Generation parameters applied to every turn.
#[derive(Debug, Clone)]
pub struct TurnSettings {
    pub temperature: f64,
    pub max_tokens: u32,
    pub history_limit: usize,
}

impl From<&ChatConfig> for TurnSettings {
    fn from(config: &ChatConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            history_limit: config.history_limit,
        }
    }
}

/// Reply of the upstream connectivity probe.
#[derive(Debug, Clone)]
pub struct ProbeReply {
    pub message: String,
    pub model: String,
}

/// Runs chat turns against per-session histories.
#[derive(Debug)]
pub struct ChatService {
    store: SessionStore,
    llm: ModelFallback,
    settings: TurnSettings,
}

impl ChatService {
    pub fn new(store: SessionStore, llm: ModelFallback, settings: TurnSettings) -> Self {
        Self {
            store,
            llm,
            settings,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn llm(&self) -> &ModelFallback {
        &self.llm
    }

    pub fn settings(&self) -> &TurnSettings {
        &self.settings
    }

    /// Run one chat turn.
    ///
    /// Blank messages are rejected before any session is created. The
    /// session lock is held for the whole turn, so turns on the same
    /// session are serialized in arrival order at the lock.
    pub async fn send(
        &self,
        session_id: Option<&str>,
        message: &str,
    ) -> Result<ChatReply, ChatError> {
        let content = message.trim();
        if content.is_empty() {
            return Err(ChatError::Validation(EMPTY_MESSAGE.to_string()));
        }
        let session_id = resolve_session_id(session_id);

        let handle = self.store.session(&session_id);
        let mut history = handle.lock().await;

        let mut messages = history.messages().to_vec();
        messages.push(Message::user(content));
        let request = CompletionRequest {
            model: self.llm.primary_model().to_string(),
            messages,
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
        };

        let result = self.llm.complete(&request).await.map_err(|err| {
            tracing::error!(session_id = %session_id, error = %err, "Chat turn failed");
            err
        })?;

        if result.attempt == Attempt::Fallback {
            tracing::info!(session_id = %session_id, model = %result.model, "Reply served by fallback model");
        }

        history.push(MessageRole::User, content);
        history.push(MessageRole::Assistant, result.response.content.clone());
        let dropped = history.trim(self.settings.history_limit);
        if dropped > 0 {
            tracing::debug!(session_id = %session_id, dropped, "Trimmed session history");
        }

        Ok(ChatReply {
            response: result.response.content,
            session_id,
            model: Some(result.model),
        })
    }

    /// Send a tiny prompt to the primary model to verify connectivity.
    ///
    /// Does not touch any session and does not fall back.
    pub async fn probe(&self) -> Result<ProbeReply, LlmError> {
        let model = self.llm.primary_model().to_string();
        let request = CompletionRequest {
            model: model.clone(),
            messages: vec![Message::user(PROBE_PROMPT)],
            max_tokens: PROBE_MAX_TOKENS,
            temperature: Some(PROBE_TEMPERATURE),
        };
        let response = self.llm.complete_with(&request, &model).await?;
        Ok(ProbeReply {
            message: response.content,
            model,
        })
    }
}
