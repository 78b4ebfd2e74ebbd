pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::chat;
use crate::extract::MAX_UPLOAD_BYTES;
use crate::ingest;
use crate::parser;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/parse",
            post(parser::handlers::handle_parse_resume),
        )
        .route(
            "/api/v1/resumes/embed",
            post(ingest::handlers::handle_embed_resume),
        )
        .route("/api/v1/chat", post(chat::handlers::handle_chat))
        // Room for multipart framing on top of the 10 MiB document cap;
        // the handler enforces the exact limit.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
        .with_state(state)
}
