use ayahsearch_common::AppConfig;
use ayahsearch_search::{SearchEngine, SessionManager};
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Immutable search engine (corpus + index + embedding client)
    pub engine: Arc<SearchEngine>,

    /// Per-conversation browsing sessions
    pub sessions: SessionManager,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig, engine: Arc<SearchEngine>) -> Self {
        Self {
            config,
            engine,
            sessions: SessionManager::new(),
        }
    }
}
