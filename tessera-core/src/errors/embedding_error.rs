/// Embedding provider and output validation errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("provider {provider} failed: {reason}")]
    ProviderFailed { provider: String, reason: String },

    #[error("provider returned {actual} embeddings for {expected} texts")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider returned an empty embedding at position {index}")]
    EmptyEmbedding { index: usize },
}
