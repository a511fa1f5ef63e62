//! Upstream connectivity probe.
//!
//! GET /test-api
//!
//! Sends a one-line prompt to the primary model. Never echoes any part of
//! the API key.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::state::AppState;

pub async fn test_api(State(state): State<AppState>) -> Response {
    match state.chat_service.probe().await {
        Ok(reply) => Json(json!({
            "status": "success",
            "message": reply.message,
            "model": reply.model,
        }))
        .into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Upstream probe failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "error": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}
