//! Score → stable sort → truncate.

use rayon::prelude::*;

use crate::document::Document;

use super::cosine::{cosine_similarity, is_zero};

/// A candidate paired with its similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored<T> {
    pub item: T,
    pub score: f32,
}

/// Score every document against `query`, keeping input order.
///
/// Candidate sets of at least `parallel_threshold` documents are scored on
/// the rayon pool. A zero query scores nothing.
pub fn score_documents<'a>(
    query: &[f32],
    documents: &[&'a Document],
    parallel_threshold: usize,
) -> Vec<Scored<&'a Document>> {
    if is_zero(query) {
        return Vec::new();
    }
    let score = |doc: &&'a Document| Scored {
        item: *doc,
        score: cosine_similarity(query, &doc.embedding) as f32,
    };
    if documents.len() >= parallel_threshold {
        documents.par_iter().map(score).collect()
    } else {
        documents.iter().map(score).collect()
    }
}

/// Sort by descending score. Equal scores keep their input order.
pub fn rank<T>(mut scored: Vec<Scored<T>>) -> Vec<Scored<T>> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// The `k` best candidates, best first. Returns everything when `k` exceeds
/// the candidate count.
pub fn top_k<T>(scored: Vec<Scored<T>>, k: usize) -> Vec<Scored<T>> {
    let mut ranked = rank(scored);
    ranked.truncate(k);
    ranked
}
