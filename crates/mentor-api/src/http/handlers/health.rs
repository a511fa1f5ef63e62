//! Liveness endpoint.

use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_MESSAGE: &str = "Asistente Académico IA funcionando";

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": SERVICE_MESSAGE,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
