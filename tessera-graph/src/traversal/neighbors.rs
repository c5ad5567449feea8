//! Bipartite adjacency: a node is adjacent to each incident edge, an edge to
//! its two endpoints. Results follow graph iteration (insertion) order.

use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use tessera_core::{EntityRef, TesseraError, TesseraResult};

use crate::graph::stable_graph::TemporalGraph;

/// Incident edges of a node (outgoing and incoming), each once, by edge index.
pub fn incident_edges(graph: &TemporalGraph, node: NodeIndex) -> Vec<EdgeIndex> {
    let mut edges: Vec<EdgeIndex> = graph
        .graph
        .edges_directed(node, Direction::Outgoing)
        .chain(graph.graph.edges_directed(node, Direction::Incoming))
        .map(|e| e.id())
        .collect();
    edges.sort();
    edges.dedup();
    edges
}

/// Neighbors of any entity in the bipartite node/edge adjacency.
pub fn get(graph: &TemporalGraph, entity: &EntityRef) -> TesseraResult<Vec<EntityRef>> {
    match entity {
        EntityRef::Node(name) => {
            let idx = graph
                .get_node(name)
                .ok_or_else(|| TesseraError::unknown_node(name))?;
            Ok(incident_edges(graph, idx)
                .into_iter()
                .filter_map(|e| graph.edge_ref(e))
                .collect())
        }
        EntityRef::Edge(src, dst) => {
            if graph.get_edge(src, dst).is_none() {
                return Err(TesseraError::unknown_edge(src, dst));
            }
            let mut endpoints = vec![EntityRef::node(src.as_str())];
            // Self-loops have a single endpoint.
            if src != dst {
                endpoints.push(EntityRef::node(dst.as_str()));
            }
            Ok(endpoints)
        }
    }
}
