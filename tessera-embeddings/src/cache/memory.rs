//! In-memory embedding cache using moka.
//!
//! TinyLFU admission, size-bounded. No TTL: entries live as long as the
//! snapshot that produced them.

use moka::sync::Cache;
use tessera_core::traits::Embedding;

/// Keys are blake3 text hashes. Values are shared embedding vectors.
pub struct EmbeddingCache {
    cache: Cache<String, Embedding>,
}

impl EmbeddingCache {
    /// Create a cache bounded to `max_entries`.
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    pub fn get(&self, key: &str) -> Option<Embedding> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, embedding: Embedding) {
        self.cache.insert(key, embedding);
    }

    /// Number of entries, after applying pending maintenance.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
