//! Ready-made provider adapters.

mod closure;

pub use closure::EmbeddingFn;
