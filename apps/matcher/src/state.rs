use std::sync::Arc;

use crate::embedding::Embedder;
use crate::pipeline::MatchOptions;
use crate::skills::SkillDictionary;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub dictionary: Arc<SkillDictionary>,
    /// Pluggable embedder. Default: FastEmbedder (all-MiniLM-L6-v2).
    pub embedder: Arc<dyn Embedder>,
    pub options: MatchOptions,
}
