mod memory;

pub use memory::EmbeddingCache;

/// Cache key for a text: its blake3 hash.
pub fn text_key(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}
