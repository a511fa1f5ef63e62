//! Chat endpoint.
//!
//! POST /chat `{"message": "...", "session_id": "..."}`
//!
//! Replies `{"response", "session_id", "model"}`. Bodies that are missing,
//! not JSON, or an empty object are rejected with 400 before any session
//! is touched.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::Instrument;
use uuid::Uuid;

use mentor_types::chat::{resolve_session_id, ChatReply};

use crate::http::error::AppError;
use crate::state::AppState;

/// Error message for a missing or unreadable body.
pub const NO_DATA: &str = "No se recibieron datos";

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    /// Conversation key; absent or blank means `"default"`.
    #[serde(default)]
    pub session_id: Option<String>,
}

impl ChatRequest {
    /// True for a body carrying no fields at all (`{}`).
    fn is_empty(&self) -> bool {
        self.message.is_none() && self.session_id.is_none()
    }
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "Unreadable chat body");
        AppError::Validation(NO_DATA.to_string())
    })?;
    if request.is_empty() {
        return Err(AppError::Validation(NO_DATA.to_string()));
    }

    let session_id = resolve_session_id(request.session_id.as_deref());
    let span = tracing::info_span!(
        "chat_turn",
        turn_id = %Uuid::now_v7(),
        session_id = %session_id,
    );

    async move {
        let reply = state
            .chat_service
            .send(Some(&session_id), request.message.as_deref().unwrap_or_default())
            .await?;
        tracing::debug!(model = ?reply.model, "Chat turn completed");
        Ok::<_, AppError>(Json(reply))
    }
    .instrument(span)
    .await
}
