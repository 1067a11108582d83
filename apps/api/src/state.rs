use std::sync::Arc;

use crate::cache::CacheHandle;
use crate::extraction::key_info::KeyInfoExtractor;
use crate::matching::scorer::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub cache: CacheHandle,
    /// Pluggable extractor. Rule-based by default; LLM-assisted when an API
    /// key is configured.
    pub extractor: Arc<dyn KeyInfoExtractor>,
    /// Pluggable scorer. Keyword-overlap by default; LLM-assisted when an
    /// API key is configured.
    pub scorer: Arc<dyn MatchScorer>,
}
