use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Maximum number of texts per provider call.
    pub batch_size: usize,
    /// Maximum number of memoized embeddings.
    pub cache_capacity: u64,
    /// Expected dimensionality. `None` accepts whatever the provider returns,
    /// as long as it is consistent within a call.
    pub dimensions: Option<usize>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            cache_capacity: defaults::DEFAULT_EMBEDDING_CACHE_CAPACITY,
            dimensions: None,
        }
    }
}
