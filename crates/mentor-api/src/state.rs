//! Application state wiring the chat service to its infrastructure.

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;

use mentor_core::chat::service::{ChatService, TurnSettings};
use mentor_core::chat::store::SessionStore;
use mentor_core::llm::fallback::ModelFallback;
use mentor_infra::llm::create_provider;
use mentor_types::config::MentorConfig;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    /// Directory the front-end is served from.
    pub web_dir: PathBuf,
}

impl AppState {
    pub fn new(chat_service: ChatService, web_dir: impl Into<PathBuf>) -> Self {
        Self {
            chat_service: Arc::new(chat_service),
            web_dir: web_dir.into(),
        }
    }

    /// Wire the OpenRouter provider, model fallback and session store.
    pub fn from_config(config: &MentorConfig, api_key: SecretString) -> anyhow::Result<Self> {
        let provider = create_provider(&config.upstream, api_key)?;
        let llm = ModelFallback::new(
            provider,
            config.chat.primary_model.clone(),
            config.chat.fallback_model.clone(),
        );
        let store = SessionStore::new(config.chat.system_prompt.clone());
        let chat_service = ChatService::new(store, llm, TurnSettings::from(&config.chat));

        Ok(Self::new(chat_service, &config.web_dir))
    }
}
