//! Graph-aware selection growth.
//!
//! Both algorithms walk the bipartite entity graph: a node is adjacent to its
//! incident edges, an edge to its two endpoints.

pub(crate) mod best_first;
pub(crate) mod breadth;
