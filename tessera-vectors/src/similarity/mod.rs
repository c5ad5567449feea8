//! Cosine scoring and top-k ranking of documents against a query vector.

pub mod cosine;
pub mod ranking;

pub use cosine::{cosine_similarity, is_zero};
pub use ranking::{rank, score_documents, top_k, Scored};
