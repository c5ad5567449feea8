//! References to graph entities. The engine never owns entities: a reference
//! is only meaningful against the graph it was resolved from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::EDGE_NAME_SEPARATOR;

/// The two entity kinds of a property graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Node,
    Edge,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Edge => "edge",
        }
    }
}

/// A node (by name) or an edge (by ordered `(src, dst)` pair).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityRef {
    Node(String),
    Edge(String, String),
}

impl EntityRef {
    pub fn node(name: impl Into<String>) -> Self {
        Self::Node(name.into())
    }

    pub fn edge(src: impl Into<String>, dst: impl Into<String>) -> Self {
        Self::Edge(src.into(), dst.into())
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Node(_) => EntityKind::Node,
            Self::Edge(..) => EntityKind::Edge,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, Self::Edge(..))
    }

    /// The node name, if this is a node.
    pub fn as_node(&self) -> Option<&str> {
        match self {
            Self::Node(name) => Some(name),
            Self::Edge(..) => None,
        }
    }

    /// The `(src, dst)` pair, if this is an edge.
    pub fn as_edge(&self) -> Option<(&str, &str)> {
        match self {
            Self::Node(_) => None,
            Self::Edge(src, dst) => Some((src, dst)),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(name) => write!(f, "{name}"),
            Self::Edge(src, dst) => write!(f, "{src}{EDGE_NAME_SEPARATOR}{dst}"),
        }
    }
}
