//! Axum router configuration with middleware.
//!
//! Middleware: CORS, tracing.
//!
//! The front-end is served from the configured web directory: `GET /`
//! answers with its `index.html`. If the directory does not exist, only
//! the API is served.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let web_dir = state.web_dir.clone();

    let mut router = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/chat", post(handlers::chat::chat))
        .route("/test-api", get(handlers::probe::test_api))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if web_dir.is_dir() {
        router = router.fallback_service(ServeDir::new(&web_dir));
        tracing::info!(path = %web_dir.display(), "Static front-end serving enabled");
    } else {
        tracing::warn!(path = %web_dir.display(), "Web directory not found, serving API only");
    }

    router
}
