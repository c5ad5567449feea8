//! EmbeddingEngine, the entry point for tessera-embeddings.
//!
//! Coordinates cache lookups, batching and validation around a single
//! caller-supplied provider.

use std::collections::HashMap;
use std::sync::Arc;

use tessera_core::config::EmbeddingConfig;
use tessera_core::traits::{Embedding, IEmbeddingProvider};
use tessera_core::{EmbeddingError, TesseraResult};
use tessera_observability::embedding_span;
use tracing::debug;

use crate::batching;
use crate::cache::{text_key, EmbeddingCache};

/// Batched, memoizing embedding front-end.
///
/// The cache is never invalidated: identical text always maps to the vector
/// first returned for it. Shared read access is safe across threads.
pub struct EmbeddingEngine {
    provider: Arc<dyn IEmbeddingProvider>,
    cache: EmbeddingCache,
    config: EmbeddingConfig,
}

impl EmbeddingEngine {
    pub fn new(provider: Arc<dyn IEmbeddingProvider>, config: EmbeddingConfig) -> Self {
        debug!(
            provider = provider.name(),
            batch_size = config.batch_size,
            cache_capacity = config.cache_capacity,
            "EmbeddingEngine initialized"
        );
        Self {
            provider,
            cache: EmbeddingCache::new(config.cache_capacity),
            config,
        }
    }

    /// Embed texts in input order.
    ///
    /// Cached texts are served from the cache; the remaining distinct texts
    /// go to the provider in as few batches as the configured batch size
    /// allows. The cache is only written once every batch succeeded.
    pub fn embed_texts(&self, texts: &[String]) -> TesseraResult<Vec<Embedding>> {
        let keys: Vec<String> = texts.iter().map(|t| text_key(t)).collect();
        let mut resolved: Vec<Option<Embedding>> = keys.iter().map(|k| self.cache.get(k)).collect();

        // Distinct misses, first occurrence order.
        let mut pending: HashMap<&str, usize> = HashMap::new();
        let mut misses: Vec<String> = Vec::new();
        for (i, slot) in resolved.iter().enumerate() {
            if slot.is_none() && !pending.contains_key(keys[i].as_str()) {
                pending.insert(keys[i].as_str(), misses.len());
                misses.push(texts[i].clone());
            }
        }

        if misses.is_empty() {
            debug!(texts = texts.len(), "all embeddings served from cache");
            return Ok(resolved.into_iter().flatten().collect());
        }

        let fresh: Vec<Embedding> = {
            let span = embedding_span!(self.provider.name(), misses.len());
            let _guard = span.enter();
            batching::embed_in_batches(
                self.provider.as_ref(),
                &misses,
                self.config.batch_size,
                self.config.dimensions,
            )?
            .into_iter()
            .map(Embedding::from)
            .collect()
        };

        for (key, &pos) in &pending {
            self.cache.insert((*key).to_string(), fresh[pos].clone());
        }
        for (i, slot) in resolved.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = pending.get(keys[i].as_str()).map(|&pos| fresh[pos].clone());
            }
        }

        debug!(
            texts = texts.len(),
            embedded = misses.len(),
            "embedding complete"
        );

        let embeddings: Vec<Embedding> = resolved.into_iter().flatten().collect();
        if embeddings.len() != texts.len() {
            return Err(EmbeddingError::LengthMismatch {
                expected: texts.len(),
                actual: embeddings.len(),
            }
            .into());
        }
        Ok(embeddings)
    }

    /// Embed one free-text query as a single-item batch.
    pub fn embed_query(&self, text: &str) -> TesseraResult<Embedding> {
        let mut embeddings = self.embed_texts(&[text.to_string()])?;
        embeddings.pop().ok_or_else(|| {
            EmbeddingError::LengthMismatch {
                expected: 1,
                actual: 0,
            }
            .into()
        })
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn config(&self) -> &EmbeddingConfig {
        &self.config
    }

    /// Number of memoized embeddings.
    pub fn cached(&self) -> u64 {
        self.cache.len()
    }
}
