use std::sync::Arc;

use crate::errors::TesseraResult;

/// An immutable, cheaply clonable embedding vector.
pub type Embedding = Arc<[f32]>;

/// Batched text → vector provider supplied by the caller.
///
/// Implementations must be length- and order-preserving and deterministic
/// for identical input.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a batch of texts, one vector per text, in input order.
    fn embed_batch(&self, texts: &[String]) -> TesseraResult<Vec<Vec<f32>>>;

    /// Embed a single text.
    fn embed(&self, text: &str) -> TesseraResult<Vec<f32>> {
        let mut batch = self.embed_batch(&[text.to_string()])?;
        if batch.len() != 1 {
            return Err(crate::errors::EmbeddingError::LengthMismatch {
                expected: 1,
                actual: batch.len(),
            }
            .into());
        }
        Ok(batch.swap_remove(0))
    }

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
