mod embedding_error;

pub use embedding_error::EmbeddingError;

/// Result alias used across the workspace.
pub type TesseraResult<T> = Result<T, TesseraError>;

/// Top-level error for every Tessera operation.
#[derive(Debug, thiserror::Error)]
pub enum TesseraError {
    #[error("unknown entity: {entity}")]
    UnknownEntity { entity: String },

    #[error("invalid window: start {start} is after end {end}")]
    InvalidWindow { start: i64, end: i64 },

    #[error("embedding failure: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("invalid configuration: {reason}")]
    ConfigError { reason: String },
}

impl TesseraError {
    /// Shorthand for an unknown node reference.
    pub fn unknown_node(name: &str) -> Self {
        Self::UnknownEntity {
            entity: name.to_string(),
        }
    }

    /// Shorthand for an unknown edge reference.
    pub fn unknown_edge(src: &str, dst: &str) -> Self {
        Self::UnknownEntity {
            entity: format!("{src}{}{dst}", crate::constants::EDGE_NAME_SEPARATOR),
        }
    }
}
