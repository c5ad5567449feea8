//! `IGraphView` implementation over the in-memory temporal graph.

use tessera_core::traits::IGraphView;
use tessera_core::{EntityRef, Properties, TesseraError, TesseraResult, Window};

use crate::graph::stable_graph::TemporalGraph;
use crate::traversal::{neighbors, window};

impl IGraphView for TemporalGraph {
    fn nodes(&self) -> Vec<EntityRef> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.node_ref(idx))
            .collect()
    }

    fn edges(&self) -> Vec<EntityRef> {
        self.graph
            .edge_indices()
            .filter_map(|idx| self.edge_ref(idx))
            .collect()
    }

    fn resolve_node(&self, name: &str) -> TesseraResult<EntityRef> {
        self.get_node(name)
            .map(|_| EntityRef::node(name))
            .ok_or_else(|| TesseraError::unknown_node(name))
    }

    fn resolve_edge(&self, src: &str, dst: &str) -> TesseraResult<EntityRef> {
        self.get_edge(src, dst)
            .map(|_| EntityRef::edge(src, dst))
            .ok_or_else(|| TesseraError::unknown_edge(src, dst))
    }

    fn neighbors(&self, entity: &EntityRef) -> TesseraResult<Vec<EntityRef>> {
        neighbors::get(self, entity)
    }

    fn exists_in_window(&self, entity: &EntityRef, window: &Window) -> TesseraResult<bool> {
        window::exists_in(self, entity, window)
    }

    fn properties(&self, entity: &EntityRef) -> TesseraResult<Properties> {
        match entity {
            EntityRef::Node(name) => self
                .node(name)
                .map(|node| node.properties.clone())
                .ok_or_else(|| TesseraError::unknown_node(name)),
            EntityRef::Edge(src, dst) => self
                .edge(src, dst)
                .map(|edge| edge.properties.clone())
                .ok_or_else(|| TesseraError::unknown_edge(src, dst)),
        }
    }
}
