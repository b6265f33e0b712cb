use std::sync::Arc;

use crate::config::Config;
use crate::credit::scoring::ScoreSource;
use crate::insurance::repository::InsuranceDirectory;
use crate::llm_client::TextCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Generative-AI capability. Default: `GeminiClient`.
    pub llm: Arc<dyn TextCompletion>,
    /// Pluggable score source. Default: `RuleBasedScorer`.
    pub score_source: Arc<dyn ScoreSource>,
    /// Account-aggregator directory, seeded with demo users at startup.
    pub directory: Arc<dyn InsuranceDirectory>,
}
