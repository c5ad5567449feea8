use serde::{Deserialize, Serialize};

use super::defaults;

/// Similarity search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Candidate sets at or above this size are scored in parallel.
    pub parallel_scoring_threshold: usize,
    /// Result size for callers that do not choose one.
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            parallel_scoring_threshold: defaults::DEFAULT_PARALLEL_SCORING_THRESHOLD,
            default_limit: defaults::DEFAULT_SEARCH_LIMIT,
        }
    }
}
