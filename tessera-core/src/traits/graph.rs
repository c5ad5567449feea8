use crate::entity::EntityRef;
use crate::errors::TesseraResult;
use crate::prop::Properties;
use crate::time::Window;

/// Read-only view of the property graph the engine is layered on.
///
/// Every lookup fails with `UnknownEntity` when the reference does not exist.
pub trait IGraphView: Send + Sync {
    /// All nodes, in graph iteration order.
    fn nodes(&self) -> Vec<EntityRef>;

    /// All edges, in graph iteration order.
    fn edges(&self) -> Vec<EntityRef>;

    fn resolve_node(&self, name: &str) -> TesseraResult<EntityRef>;

    fn resolve_edge(&self, src: &str, dst: &str) -> TesseraResult<EntityRef>;

    /// Bipartite adjacency: a node's incident edges, or an edge's endpoints.
    fn neighbors(&self, entity: &EntityRef) -> TesseraResult<Vec<EntityRef>>;

    /// Whether the entity has any activity inside `window`.
    fn exists_in_window(&self, entity: &EntityRef, window: &Window) -> TesseraResult<bool>;

    fn properties(&self, entity: &EntityRef) -> TesseraResult<Properties>;
}
