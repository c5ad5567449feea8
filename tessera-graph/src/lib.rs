//! # tessera-graph
//!
//! In-memory temporal property graph backing the vector engine.
//! Nodes are identified by name, edges by their ordered `(src, dst)` pair.
//! Every addition is timestamped, which is what window queries are answered from.

pub mod graph;
pub mod traversal;
mod view;

pub use graph::history::History;
pub use graph::stable_graph::{EdgeData, NodeData, TemporalGraph};
