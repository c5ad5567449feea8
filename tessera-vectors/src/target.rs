//! Which candidates a search or expansion may admit.

use std::fmt;

use tessera_core::{EntityKind, EntityRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchTarget {
    /// Nodes and edges, ranked as entities.
    Entities,
    Nodes,
    Edges,
    /// Documents directly, whatever kind of entity owns them.
    Documents,
}

impl SearchTarget {
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Self::Nodes => Some(EntityKind::Node),
            Self::Edges => Some(EntityKind::Edge),
            Self::Entities | Self::Documents => None,
        }
    }

    /// Whether an entity of this kind can be added to a selection.
    pub fn admits(&self, entity: &EntityRef) -> bool {
        self.kind().map_or(true, |kind| entity.kind() == kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entities => "entities",
            Self::Nodes => "nodes",
            Self::Edges => "edges",
            Self::Documents => "documents",
        }
    }
}

impl fmt::Display for SearchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
