//! Existence of entities inside a time window.

use tessera_core::{EntityRef, TesseraError, TesseraResult, Window};

use crate::graph::stable_graph::TemporalGraph;

/// Whether the entity has any update inside `window`.
///
/// Node activity includes additions of incident edges.
pub fn exists_in(graph: &TemporalGraph, entity: &EntityRef, window: &Window) -> TesseraResult<bool> {
    match entity {
        EntityRef::Node(name) => graph
            .node(name)
            .map(|node| node.history.active_in(window))
            .ok_or_else(|| TesseraError::unknown_node(name)),
        EntityRef::Edge(src, dst) => graph
            .edge(src, dst)
            .map(|edge| edge.history.active_in(window))
            .ok_or_else(|| TesseraError::unknown_edge(src, dst)),
    }
}
