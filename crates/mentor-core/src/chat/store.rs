//! In-memory session store.
//!
//! Maps session keys to [`ConversationHistory`] values. Each session sits
//! behind its own `tokio::sync::Mutex`, so a whole chat turn can hold the
//! lock across the upstream call while other sessions proceed untouched.
//!
//! Handles are cloned out of the `DashMap` before locking; a `DashMap`
//! guard is never held across an `.await`.
//!
//! Sessions live for the lifetime of the store and are never evicted.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use mentor_types::error::SessionError;
use mentor_types::llm::{Message, MessageRole};

use super::history::ConversationHistory;

/// Shared, lockable history of a single session.
pub type SessionHandle = Arc<Mutex<ConversationHistory>>;

/// Process-scoped store of conversation histories.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<String, SessionHandle>,
    system_prompt: String,
}

impl SessionStore {
    /// Create an empty store; new sessions are seeded with `system_prompt`.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            sessions: DashMap::new(),
            system_prompt: system_prompt.into(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Handle for `key`, creating a seeded session if absent.
    pub fn session(&self, key: &str) -> SessionHandle {
        if let Some(existing) = self.sessions.get(key) {
            return Arc::clone(existing.value());
        }
        let handle = self
            .sessions
            .entry(key.to_string())
            .or_insert_with(|| {
                tracing::debug!(session_id = %key, "Creating session");
                Arc::new(Mutex::new(ConversationHistory::new(self.system_prompt.clone())))
            });
        Arc::clone(handle.value())
    }

    /// Handle for `key` if the session exists.
    pub fn existing(&self, key: &str) -> Option<SessionHandle> {
        self.sessions.get(key).map(|r| Arc::clone(r.value()))
    }

    /// Messages of `key`, creating a seeded session if absent.
    pub async fn get_or_create(&self, key: &str) -> Vec<Message> {
        let handle = self.session(key);
        let history = handle.lock().await;
        history.messages().to_vec()
    }

    /// Append a message to an existing session.
    pub async fn append(
        &self,
        key: &str,
        role: MessageRole,
        content: impl Into<String>,
    ) -> Result<(), SessionError> {
        let handle = self
            .existing(key)
            .ok_or_else(|| SessionError::NotFound(key.to_string()))?;
        handle.lock().await.push(role, content);
        Ok(())
    }

    /// Bound an existing session to `max_len` messages.
    ///
    /// Returns the number of messages dropped.
    pub async fn trim(&self, key: &str, max_len: usize) -> Result<usize, SessionError> {
        let handle = self
            .existing(key)
            .ok_or_else(|| SessionError::NotFound(key.to_string()))?;
        let dropped = handle.lock().await.trim(max_len);
        Ok(dropped)
    }

    /// Snapshot of an existing session's messages.
    pub async fn history(&self, key: &str) -> Option<Vec<Message>> {
        let handle = self.existing(key)?;
        let history = handle.lock().await;
        Some(history.messages().to_vec())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sessions.contains_key(key)
    }

    /// Number of sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
