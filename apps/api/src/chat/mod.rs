//! Read path: retrieval-augmented answering over stored resume embeddings.

pub mod handlers;
pub mod prompts;

use tracing::info;

use crate::errors::AppError;
use crate::index::{MatchResult, VectorIndex};
use crate::llm::{Embedder, TextGenerator};

/// How many resume matches ground each answer.
const TOP_K: usize = 3;

const NOT_PROVIDED: &str = "Not provided";

/// Fields rendered into each context block, in order.
const CONTEXT_FIELDS: &[(&str, &str)] = &[
    ("Name", "name"),
    ("Role", "role"),
    ("Skills", "skills"),
    ("Experience", "experience"),
    ("Education", "education"),
    ("Projects", "projects"),
];

#[derive(Debug)]
pub struct AnswerResult {
    pub text: String,
    pub match_count: usize,
}

fn render_match(m: &MatchResult) -> String {
    let mut block = String::from("=== MY RESUME DATA ===");
    for (label, key) in CONTEXT_FIELDS {
        let value = m
            .metadata
            .get(*key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .unwrap_or(NOT_PROVIDED);
        block.push_str(&format!("\n{label}: {value}"));
    }
    block
}

/// Assembles the grounding context from the retrieved matches, one block per
/// match separated by a blank line, or the documented placeholder when the
/// namespace held nothing.
fn render_context(matches: &[MatchResult]) -> String {
    if matches.is_empty() {
        return prompts::NO_RESUME_DATA.to_string();
    }
    matches
        .iter()
        .map(render_match)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Answers a question about the resumes stored in `namespace`.
///
/// Embeds the question, retrieves the top matches, assembles a grounded
/// first-person prompt, and forwards it to the generation capability. An
/// empty query is rejected before any capability is invoked.
pub async fn answer(
    query: &str,
    namespace: &str,
    embedder: &dyn Embedder,
    index: &dyn VectorIndex,
    generator: &dyn TextGenerator,
) -> Result<AnswerResult, AppError> {
    if query.trim().is_empty() {
        return Err(AppError::Validation("Query is required".to_string()));
    }

    let vector = embedder.embed(query).await.map_err(|e| AppError::Embedding {
        auth: e.is_auth_related(),
        message: e.to_string(),
    })?;

    let matches = index
        .query(namespace, vector, TOP_K, true)
        .await
        .map_err(|e| AppError::Index(e.to_string()))?;
    let match_count = matches.len();

    let context = render_context(&matches);
    let prompt = prompts::build_chat_prompt(&context, query);

    let mut text = generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;
    if text.trim().is_empty() {
        text = prompts::NO_MODEL_RESPONSE.to_string();
    }

    info!("Answered chat query with {match_count} matches from namespace {namespace}");
    Ok(AnswerResult { text, match_count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::index::IndexError;
    use crate::llm::LlmError;

    struct TrackingEmbedder {
        called: AtomicBool,
    }

    impl TrackingEmbedder {
        fn new() -> Self {
            Self {
                called: AtomicBool::new(false),
            }
        }
    }

    #[async_trait]
    impl Embedder for TrackingEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>, LlmError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(vec![1.0, 0.0])
        }
    }

    struct FixedIndex {
        matches: Vec<MatchResult>,
    }

    #[async_trait]
    impl VectorIndex for FixedIndex {
        async fn upsert(
            &self,
            _namespace: &str,
            _id: &str,
            _vector: Vec<f32>,
            _metadata: HashMap<String, String>,
        ) -> Result<(), IndexError> {
            Ok(())
        }

        async fn query(
            &self,
            _namespace: &str,
            _vector: Vec<f32>,
            _top_k: usize,
            _include_metadata: bool,
        ) -> Result<Vec<MatchResult>, IndexError> {
            Ok(self.matches.clone())
        }
    }

    struct CapturingGenerator {
        prompts: Mutex<Vec<String>>,
        reply: String,
    }

    impl CapturingGenerator {
        fn new(reply: &str) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                reply: reply.to_string(),
            }
        }

        fn last_prompt(&self) -> String {
            self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl TextGenerator for CapturingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    fn match_with(metadata: &[(&str, &str)]) -> MatchResult {
        MatchResult {
            id: "resume-1".to_string(),
            score: 0.9,
            metadata: metadata
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_empty_query_rejected_before_embedding() {
        let embedder = TrackingEmbedder::new();
        let index = FixedIndex { matches: vec![] };
        let generator = CapturingGenerator::new("hi");

        let err = answer("  ", "default-user", &embedder, &index, &generator)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(!embedder.called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_zero_matches_uses_placeholder_context() {
        let embedder = TrackingEmbedder::new();
        let index = FixedIndex { matches: vec![] };
        let generator = CapturingGenerator::new("I can't say.");

        let result = answer("What do I do?", "default-user", &embedder, &index, &generator)
            .await
            .unwrap();

        assert_eq!(result.match_count, 0);
        assert!(generator.last_prompt().contains("No resume data found."));
    }

    #[tokio::test]
    async fn test_context_block_renders_metadata_fields() {
        let embedder = TrackingEmbedder::new();
        let index = FixedIndex {
            matches: vec![match_with(&[
                ("name", "Jane Doe"),
                ("skills", "rust, sql"),
            ])],
        };
        let generator = CapturingGenerator::new("I am Jane.");

        let result = answer("Who am I?", "user-7", &embedder, &index, &generator)
            .await
            .unwrap();

        assert_eq!(result.match_count, 1);
        let prompt = generator.last_prompt();
        assert!(prompt.contains("=== MY RESUME DATA ==="));
        assert!(prompt.contains("Name: Jane Doe"));
        assert!(prompt.contains("Skills: rust, sql"));
        assert!(prompt.contains("Role: Not provided"));
        assert!(prompt.contains("QUESTION ABOUT MY BACKGROUND: Who am I?"));
    }

    #[tokio::test]
    async fn test_blocks_joined_by_blank_line() {
        let matches = vec![
            match_with(&[("name", "Jane Doe")]),
            match_with(&[("name", "Jane Doe")]),
        ];
        let context = render_context(&matches);
        assert_eq!(context.matches("=== MY RESUME DATA ===").count(), 2);
        assert!(context.contains("\n\n"));
    }

    #[tokio::test]
    async fn test_empty_generation_falls_back_to_placeholder() {
        let embedder = TrackingEmbedder::new();
        let index = FixedIndex {
            matches: vec![match_with(&[("name", "Jane Doe")])],
        };
        let generator = CapturingGenerator::new("");

        let result = answer("Who am I?", "default-user", &embedder, &index, &generator)
            .await
            .unwrap();

        assert_eq!(result.text, "No response from model.");
    }

    #[tokio::test]
    async fn test_embedding_failure_aborts_request() {
        struct FailingEmbedder;

        #[async_trait]
        impl Embedder for FailingEmbedder {
            async fn embed(&self, _text: &str) -> Result<Vec<f32>, LlmError> {
                Err(LlmError::EmptyEmbedding)
            }
        }

        let index = FixedIndex { matches: vec![] };
        let generator = CapturingGenerator::new("unused");

        let err = answer("Who am I?", "default-user", &FailingEmbedder, &index, &generator)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Embedding { auth: false, .. }));
        assert!(generator.prompts.lock().unwrap().is_empty());
    }
}
