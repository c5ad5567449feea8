//! Adjacency and temporal queries over the graph.

pub mod neighbors;
pub mod window;
