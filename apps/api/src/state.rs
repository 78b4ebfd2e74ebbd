use std::sync::Arc;

use crate::index::VectorIndex;
use crate::llm::{Embedder, TextGenerator};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The three external capabilities are carried as trait objects so tests (and
/// future provider swaps) can substitute in-process fakes without touching the
/// handlers or pipelines.
#[derive(Clone)]
pub struct AppState {
    pub embedder: Arc<dyn Embedder>,
    pub index: Arc<dyn VectorIndex>,
    pub generator: Arc<dyn TextGenerator>,
}
