//! Chat turn types for Mentor.

use serde::{Deserialize, Serialize};

/// Session key used when the client does not supply one.
pub const DEFAULT_SESSION_ID: &str = "default";

/// Which attempt of the fallback sequence produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attempt {
    Primary,
    Fallback,
}

/// Result of one successful chat turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// The assistant's reply text.
    pub response: String,
    /// The session the turn was recorded in.
    pub session_id: String,
    /// Model identifier that actually produced the reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Resolve the session key for a request.
///
/// Absent or blank identifiers map to [`DEFAULT_SESSION_ID`].
pub fn resolve_session_id(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => DEFAULT_SESSION_ID.to_string(),
    }
}
