use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::answer;
use crate::errors::AppError;
use crate::index::DEFAULT_NAMESPACE;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub query: String,
    /// Falls back to the shared default namespace when omitted.
    /// `userId` is accepted as an alias for older clients.
    #[serde(default, alias = "userId")]
    pub namespace: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub result: String,
    #[serde(rename = "matchCount")]
    pub match_count: usize,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let namespace = req.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE);
    let result = answer(
        &req.query,
        namespace,
        state.embedder.as_ref(),
        state.index.as_ref(),
        state.generator.as_ref(),
    )
    .await?;

    Ok(Json(ChatResponse {
        success: true,
        result: result.text,
        match_count: result.match_count,
    }))
}
