//! Adapter turning a plain function into an embedding provider.

use tessera_core::traits::IEmbeddingProvider;
use tessera_core::TesseraResult;

/// Wraps `Fn(&[String]) -> TesseraResult<Vec<Vec<f32>>>` as a provider.
pub struct EmbeddingFn<F> {
    name: String,
    f: F,
}

impl<F> EmbeddingFn<F>
where
    F: Fn(&[String]) -> TesseraResult<Vec<Vec<f32>>> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self::named("function", f)
    }

    pub fn named(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> IEmbeddingProvider for EmbeddingFn<F>
where
    F: Fn(&[String]) -> TesseraResult<Vec<Vec<f32>>> + Send + Sync,
{
    fn embed_batch(&self, texts: &[String]) -> TesseraResult<Vec<Vec<f32>>> {
        (self.f)(texts)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
