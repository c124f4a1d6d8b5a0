use std::sync::Arc;

use crate::config::Config;
use crate::matching::matcher::KeywordMatcher;

/// Shared application state injected into all route handlers via axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Shared matcher. Stateless: concurrent handler calls only read the
    /// static dictionaries. The missing-keyword heuristic behind it is
    /// swappable via `KeywordMatcher::new`.
    pub matcher: Arc<KeywordMatcher>,
}
