//! # tessera-vectors
//!
//! Vectorised search over a temporal property graph.
//!
//! `VectorisedGraph::vectorise` renders one document per entity, embeds the
//! documents in batches and freezes them into a `DocumentStore`. Queries then
//! produce `VectorSelection`s (top-k by cosine similarity) which can be
//! combined, extended by hand, or grown along the graph with breadth-first or
//! similarity-guided expansion. Every admission point honours an optional
//! time `Window`.

pub mod document;
mod expansion;
pub mod graph;
pub mod query;
pub mod selection;
pub mod similarity;
pub mod target;
pub mod vectorise;
pub mod window_filter;

pub use document::template::DefaultTemplate;
pub use document::{Document, DocumentStore};
pub use graph::VectorisedGraph;
pub use query::Query;
pub use selection::{SelectedItem, VectorSelection};
pub use target::SearchTarget;
