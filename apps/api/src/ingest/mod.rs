//! Write path: serialize a submitted resume, embed it, and upsert the vector
//! with flattened metadata into the caller's namespace.

pub mod handlers;
pub mod serializer;

use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::index::{VectorIndex, DEFAULT_NAMESPACE};
use crate::llm::Embedder;
use crate::models::resume::ResumeRecord;

/// Embeds the resume and upserts it into the vector index, returning the
/// record id used. Missing id falls back to a timestamp-derived one; missing
/// namespace falls back to the shared default. Upserts are last-write-wins:
/// concurrent double-submission of the same id races at the storage layer,
/// a known limitation of this core.
pub async fn store_resume_embedding(
    record: &ResumeRecord,
    embedder: &dyn Embedder,
    index: &dyn VectorIndex,
) -> Result<String, AppError> {
    let namespace = record.user_id.as_deref().unwrap_or(DEFAULT_NAMESPACE);
    let id = record
        .id
        .clone()
        .unwrap_or_else(|| format!("resume-{}", Utc::now().timestamp_millis()));

    let text = serializer::serialize_resume(record);
    let vector = embedder.embed(&text).await.map_err(|e| AppError::Embedding {
        auth: e.is_auth_related(),
        message: e.to_string(),
    })?;

    index
        .upsert(namespace, &id, vector, serializer::flatten_metadata(record))
        .await
        .map_err(|e| AppError::Index(e.to_string()))?;

    info!("Stored resume embedding {id} in namespace {namespace}");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::index::{IndexError, MatchResult};
    use crate::llm::LlmError;

    struct FixedEmbedder;

    #[async_trait]
    impl Embedder for FixedEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>, LlmError> {
            Ok(vec![0.1, 0.2, 0.3])
        }
    }

    #[derive(Default)]
    struct RecordingIndex {
        upserts: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl VectorIndex for RecordingIndex {
        async fn upsert(
            &self,
            namespace: &str,
            id: &str,
            _vector: Vec<f32>,
            _metadata: HashMap<String, String>,
        ) -> Result<(), IndexError> {
            self.upserts
                .lock()
                .unwrap()
                .push((namespace.to_string(), id.to_string()));
            Ok(())
        }

        async fn query(
            &self,
            _namespace: &str,
            _vector: Vec<f32>,
            _top_k: usize,
            _include_metadata: bool,
        ) -> Result<Vec<MatchResult>, IndexError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_defaults_namespace_and_derives_id() {
        let index = RecordingIndex::default();
        let record = ResumeRecord::default();

        let id = store_resume_embedding(&record, &FixedEmbedder, &index)
            .await
            .unwrap();

        assert!(id.starts_with("resume-"));
        let upserts = index.upserts.lock().unwrap();
        assert_eq!(upserts.len(), 1);
        assert_eq!(upserts[0].0, DEFAULT_NAMESPACE);
        assert_eq!(upserts[0].1, id);
    }

    #[tokio::test]
    async fn test_uses_supplied_namespace_and_id() {
        let index = RecordingIndex::default();
        let record = ResumeRecord {
            id: Some("resume-42".to_string()),
            user_id: Some("user-7".to_string()),
            ..Default::default()
        };

        let id = store_resume_embedding(&record, &FixedEmbedder, &index)
            .await
            .unwrap();

        assert_eq!(id, "resume-42");
        let upserts = index.upserts.lock().unwrap();
        assert_eq!(upserts[0].0, "user-7");
    }

    #[tokio::test]
    async fn test_auth_embedding_failure_is_flagged() {
        struct AuthFailEmbedder;

        #[async_trait]
        impl Embedder for AuthFailEmbedder {
            async fn embed(&self, _text: &str) -> Result<Vec<f32>, LlmError> {
                Err(LlmError::Api {
                    status: 400,
                    message: "API key not valid".to_string(),
                })
            }
        }

        let index = RecordingIndex::default();
        let err = store_resume_embedding(&ResumeRecord::default(), &AuthFailEmbedder, &index)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Embedding { auth: true, .. }));
        assert!(index.upserts.lock().unwrap().is_empty());
    }
}
