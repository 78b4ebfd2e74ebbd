use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Upload boundary rejections (`Validation`, `UnsupportedType`, `TooLarge`) are
/// surfaced verbatim to the caller. Capability failures (extraction, embedding,
/// index, generation) are logged with their original cause and surfaced as
/// generic messages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    #[error("Too large: {0}")]
    TooLarge(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Embedding error: {message}")]
    Embedding { message: String, auth: bool },

    #[error("Index error: {0}")]
    Index(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UnsupportedType(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg.clone()),
            AppError::TooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg.clone()),
            AppError::Extraction(cause) => {
                tracing::error!("Extraction error: {cause}");
                (
                    StatusCode::BAD_REQUEST,
                    "Could not extract text from file. Please ensure the file contains readable text."
                        .to_string(),
                )
            }
            AppError::Embedding { message, auth } => {
                tracing::error!("Embedding error: {message}");
                if *auth {
                    (
                        StatusCode::UNAUTHORIZED,
                        "API authentication failed".to_string(),
                    )
                } else {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Failed to generate embedding".to_string(),
                    )
                }
            }
            AppError::Index(msg) => {
                tracing::error!("Index error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A vector index error occurred".to_string(),
                )
            }
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}
