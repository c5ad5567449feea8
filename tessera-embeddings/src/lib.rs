//! # tessera-embeddings
//!
//! Wraps a caller-supplied [`IEmbeddingProvider`](tessera_core::traits::IEmbeddingProvider)
//! with batching, output validation, and a memoizing cache whose lifetime is
//! the lifetime of the engine (one vectorised snapshot).

pub mod batching;
pub mod cache;
pub mod engine;
pub mod providers;

pub use engine::EmbeddingEngine;
pub use providers::EmbeddingFn;
