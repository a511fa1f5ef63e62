//! Configuration types for Mentor.
//!
//! `MentorConfig` represents the optional `mentor.toml` that tunes the chat
//! turn (models, sampling, history bound) and the upstream endpoint. All
//! fields have defaults, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Persona instruction seeded at the head of every session.
pub const DEFAULT_SYSTEM_PROMPT: &str = "Eres un orientador académico y mentor para estudiantes. \
Explicas de forma clara, motivadora y sencilla. \
Ayudas con técnicas de estudio, organización del tiempo, \
orientación vocacional, informática básica, programación y redes. \
Nunca humillas ni juzgas. Motivas al estudiante. \
Responde siempre en español.";

/// Smallest history bound that still fits the system message and one exchange.
pub const MIN_HISTORY_LIMIT: usize = 3;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MentorConfig {
    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Directory holding the front-end `index.html`.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,
}

impl MentorConfig {
    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chat.validate()?;
        self.upstream.validate()
    }
}

/// Parameters of a chat turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Preferred model, tried first.
    #[serde(default = "default_primary_model")]
    pub primary_model: String,

    /// Model tried once when the primary call fails.
    #[serde(default = "default_fallback_model")]
    pub fallback_model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum output tokens per reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Maximum number of messages kept per session, system message included.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

impl ChatConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.primary_model.trim().is_empty() || self.fallback_model.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "primary_model and fallback_model must not be empty".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Invalid(format!(
                "temperature must be within 0.0..=2.0, got {}",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::Invalid("max_tokens must be positive".to_string()));
        }
        if self.history_limit < MIN_HISTORY_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "history_limit must be at least {MIN_HISTORY_LIMIT}, got {}",
                self.history_limit
            )));
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            primary_model: default_primary_model(),
            fallback_model: default_fallback_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            history_limit: default_history_limit(),
            system_prompt: default_system_prompt(),
        }
    }
}

/// Where and how to reach the completion API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-call timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be positive".to_string()));
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_primary_model() -> String {
    "google/gemma-7b-it:free".to_string()
}

fn default_fallback_model() -> String {
    "meta-llama/llama-3-8b-instruct".to_string()
}

fn default_temperature() -> f64 {
    0.6
}

fn default_max_tokens() -> u32 {
    300
}

fn default_history_limit() -> usize {
    15
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_web_dir() -> String {
    "static".to_string()
}
