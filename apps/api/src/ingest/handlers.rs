use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::ingest::store_resume_embedding;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EmbedResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}

/// POST /api/v1/resumes/embed
pub async fn handle_embed_resume(
    State(state): State<AppState>,
    Json(record): Json<ResumeRecord>,
) -> Result<Json<EmbedResponse>, AppError> {
    let id = store_resume_embedding(&record, state.embedder.as_ref(), state.index.as_ref()).await?;
    Ok(Json(EmbedResponse {
        success: true,
        message: "Embedding stored!".to_string(),
        id,
    }))
}
