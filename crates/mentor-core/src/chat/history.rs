//! Bounded conversation history.
//!
//! A history always starts with the system persona message. Trimming drops
//! the oldest non-system messages and keeps the most recent tail.

use mentor_types::llm::{Message, MessageRole};

/// Ordered message log for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    /// Start a history seeded with the system message.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The leading system message.
    pub fn system_message(&self) -> &Message {
        &self.messages[0]
    }

    pub fn push(&mut self, role: MessageRole, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }

    /// Bound the history to `max_len` messages.
    ///
    /// When longer, the history becomes the system message followed by the
    /// last `max_len - 1` messages. A `max_len` below 1 is treated as 1.
    /// Returns the number of messages dropped.
    pub fn trim(&mut self, max_len: usize) -> usize {
        let max_len = max_len.max(1);
        if self.messages.len() <= max_len {
            return 0;
        }
        let dropped = self.messages.len() - max_len;
        self.messages.drain(1..=dropped);
        dropped
    }
}
