//! External model capabilities: text embedding and grounded text generation.
//!
//! ARCHITECTURAL RULE: no other module may call a model provider directly.
//! Handlers and pipelines depend only on these traits; `gemini` holds the
//! single REST implementation.

use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned an empty embedding")]
    EmptyEmbedding,

    #[error("model returned no text")]
    EmptyContent,
}

impl LlmError {
    /// Whether the failure looks like a credential problem. Auth-class
    /// failures are surfaced to callers as authentication errors rather than
    /// generic internal errors.
    pub fn is_auth_related(&self) -> bool {
        match self {
            LlmError::Api { status, message } => {
                *status == 401
                    || *status == 403
                    || message.to_lowercase().contains("api key")
                    || message.to_lowercase().contains("credential")
            }
            _ => false,
        }
    }
}

/// Text to fixed-length vector. An empty vector is a contract violation and
/// implementations must report it as an error, never return it.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, LlmError>;
}

/// Prompt to generated text. Treated as untrusted/best-effort: callers
/// constrain it through the prompt and tolerate empty output.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}
