//! StableGraph wrapper with name indexes for nodes and `(src, dst)` indexes for edges.

use std::collections::HashMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::Directed;
use tessera_core::{EntityRef, IntoTime, Prop, Properties};
use tracing::trace;

use super::history::History;

/// Node weight: name, addition history, properties.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub name: String,
    pub history: History,
    pub properties: Properties,
}

/// Edge weight: addition history and properties. Endpoints live in the graph.
#[derive(Debug, Clone, Default)]
pub struct EdgeData {
    pub history: History,
    pub properties: Properties,
}

/// A temporal property graph.
///
/// At most one edge exists per ordered `(src, dst)` pair; repeated additions
/// append to its history and merge properties. Nodes and edges are never
/// removed, so index order is insertion order.
#[derive(Debug, Default)]
pub struct TemporalGraph {
    pub graph: StableGraph<NodeData, EdgeData, Directed>,
    node_index: HashMap<String, NodeIndex>,
    edge_index: HashMap<(NodeIndex, NodeIndex), EdgeIndex>,
}

impl TemporalGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or update) a node at `time`.
    pub fn add_node<T, I>(&mut self, time: T, name: &str, properties: I) -> NodeIndex
    where
        T: IntoTime,
        I: IntoIterator<Item = (String, Prop)>,
    {
        let idx = self.ensure_node(name);
        let node = &mut self.graph[idx];
        node.history.insert(time.into_time());
        node.properties.extend(properties);
        idx
    }

    /// Add (or update) the edge `src -> dst` at `time`, creating missing
    /// endpoints. The update also counts as activity of both endpoints.
    pub fn add_edge<T, I>(&mut self, time: T, src: &str, dst: &str, properties: I) -> EdgeIndex
    where
        T: IntoTime,
        I: IntoIterator<Item = (String, Prop)>,
    {
        let time = time.into_time();
        let src_idx = self.ensure_node(src);
        let dst_idx = self.ensure_node(dst);
        self.graph[src_idx].history.insert(time);
        self.graph[dst_idx].history.insert(time);

        let idx = match self.edge_index.get(&(src_idx, dst_idx)) {
            Some(&idx) => idx,
            None => {
                let idx = self.graph.add_edge(src_idx, dst_idx, EdgeData::default());
                self.edge_index.insert((src_idx, dst_idx), idx);
                trace!(src, dst, time, "edge created");
                idx
            }
        };
        let edge = &mut self.graph[idx];
        edge.history.insert(time);
        edge.properties.extend(properties);
        idx
    }

    /// Get the index of a node, inserting an empty one if absent.
    pub fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(NodeData {
            name: name.to_string(),
            history: History::new(),
            properties: Properties::new(),
        });
        self.node_index.insert(name.to_string(), idx);
        trace!(name, "node created");
        idx
    }

    pub fn get_node(&self, name: &str) -> Option<NodeIndex> {
        self.node_index.get(name).copied()
    }

    pub fn get_edge(&self, src: &str, dst: &str) -> Option<EdgeIndex> {
        let src_idx = self.get_node(src)?;
        let dst_idx = self.get_node(dst)?;
        self.edge_index.get(&(src_idx, dst_idx)).copied()
    }

    pub fn node(&self, name: &str) -> Option<&NodeData> {
        self.get_node(name).and_then(|idx| self.graph.node_weight(idx))
    }

    pub fn edge(&self, src: &str, dst: &str) -> Option<&EdgeData> {
        self.get_edge(src, dst)
            .and_then(|idx| self.graph.edge_weight(idx))
    }

    /// Reference to the node at `idx`.
    pub fn node_ref(&self, idx: NodeIndex) -> Option<EntityRef> {
        self.graph
            .node_weight(idx)
            .map(|node| EntityRef::node(node.name.as_str()))
    }

    /// Reference to the edge at `idx`, by endpoint names.
    pub fn edge_ref(&self, idx: EdgeIndex) -> Option<EntityRef> {
        let (src, dst) = self.graph.edge_endpoints(idx)?;
        let src = self.graph.node_weight(src)?;
        let dst = self.graph.node_weight(dst)?;
        Some(EntityRef::edge(src.name.as_str(), dst.name.as_str()))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Vec<(String, Prop)> {
        vec![("name".to_string(), Prop::from(name))]
    }

    #[test]
    fn add_edge_creates_endpoints() {
        let mut g = TemporalGraph::new();
        g.add_edge(2, "a", "b", named("ab"));
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.get_edge("a", "b").is_some());
        assert!(g.get_edge("b", "a").is_none());
    }

    #[test]
    fn repeated_edge_additions_merge() {
        let mut g = TemporalGraph::new();
        g.add_edge(1, "a", "b", named("first"));
        g.add_edge(5, "a", "b", vec![("weight".to_string(), Prop::from(2_i64))]);
        assert_eq!(g.edge_count(), 1);
        let edge = g.edge("a", "b").unwrap();
        assert_eq!(edge.history.iter().collect::<Vec<_>>(), vec![1, 5]);
        assert_eq!(edge.properties.get("name"), Some(&Prop::from("first")));
        assert_eq!(edge.properties.get("weight"), Some(&Prop::from(2_i64)));
    }

    #[test]
    fn edge_updates_count_as_node_activity() {
        let mut g = TemporalGraph::new();
        g.add_node(1, "a", Properties::new());
        g.add_edge(4, "a", "b", Properties::new());
        let a = g.node("a").unwrap();
        assert_eq!(a.history.iter().collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(g.node("b").unwrap().history.earliest(), Some(4));
    }

    #[test]
    fn references_use_names() {
        let mut g = TemporalGraph::new();
        let e = g.add_edge(1, "x", "y", Properties::new());
        assert_eq!(g.edge_ref(e), Some(EntityRef::edge("x", "y")));
        let n = g.get_node("x").unwrap();
        assert_eq!(g.node_ref(n), Some(EntityRef::node("x")));
    }
}
