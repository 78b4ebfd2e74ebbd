//! Vector index capability: namespace-partitioned nearest-neighbor storage.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod pinecone;

/// Namespace used when a caller supplies none. All writes and queries for a
/// given logical user must agree on namespace to be retrievable.
pub const DEFAULT_NAMESPACE: &str = "default-user";

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// One hit from a top-K similarity query, ordered by descending score as
/// the index returns them. Metadata carries the flattened resume fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Namespace-partitioned nearest-neighbor store keyed by opaque record id.
/// Upserts are last-write-wins; there is no deletion path in this core.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    async fn upsert(
        &self,
        namespace: &str,
        id: &str,
        vector: Vec<f32>,
        metadata: HashMap<String, String>,
    ) -> Result<(), IndexError>;

    async fn query(
        &self,
        namespace: &str,
        vector: Vec<f32>,
        top_k: usize,
        include_metadata: bool,
    ) -> Result<Vec<MatchResult>, IndexError>;
}
