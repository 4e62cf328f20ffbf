use std::sync::Arc;

use crate::config::Config;
use crate::extractor::DocumentExtractor;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Completion client, built once in `main`. Tests swap in a double.
    pub completion: Arc<dyn CompletionService>,
    pub extractor: Arc<dyn DocumentExtractor>,
    pub config: Config,
}
