//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::SearchEngine;

/// Shared application state.
///
/// The engine and its catalog are immutable, so requests share them
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// Search engine over the loaded catalog
    pub engine: Arc<SearchEngine>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
