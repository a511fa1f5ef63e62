use thiserror::Error;

use crate::llm::LlmError;

/// Errors related to session store operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session '{0}' not found")]
    NotFound(String),
}

/// Errors surfaced by a chat turn.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Upstream(#[from] LlmError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API key: set OPENROUTER_API_KEY or pass --api-key")]
    MissingApiKey,

    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        let err = SessionError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "session 'abc' not found");
    }

    #[test]
    fn test_chat_error_is_transparent_for_upstream() {
        let err: ChatError = LlmError::AuthenticationFailed.into();
        assert_eq!(err.to_string(), "authentication failed");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid("history_limit must be at least 3".to_string());
        assert!(err.to_string().contains("history_limit"));
    }
}
