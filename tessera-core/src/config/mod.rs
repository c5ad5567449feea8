//! Configuration for every Tessera subsystem, loadable from TOML.

pub mod defaults;
mod embedding_config;
mod observability_config;
mod search_config;

pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use search_config::SearchConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{TesseraError, TesseraResult};

/// Root configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TesseraConfig {
    pub embedding: EmbeddingConfig,
    pub search: SearchConfig,
    pub observability: ObservabilityConfig,
}

impl TesseraConfig {
    /// Parse a TOML document. Missing sections and keys use defaults.
    pub fn from_toml(source: &str) -> TesseraResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| TesseraError::ConfigError {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no subsystem can work with.
    pub fn validate(&self) -> TesseraResult<()> {
        if self.embedding.batch_size == 0 {
            return Err(TesseraError::ConfigError {
                reason: "embedding.batch_size must be at least 1".to_string(),
            });
        }
        if self.embedding.batch_size > crate::constants::MAX_EMBEDDING_BATCH_SIZE {
            return Err(TesseraError::ConfigError {
                reason: format!(
                    "embedding.batch_size {} exceeds maximum {}",
                    self.embedding.batch_size,
                    crate::constants::MAX_EMBEDDING_BATCH_SIZE
                ),
            });
        }
        if self.embedding.dimensions == Some(0) {
            return Err(TesseraError::ConfigError {
                reason: "embedding.dimensions must be positive when set".to_string(),
            });
        }
        Ok(())
    }
}
