//! Hop-limited breadth expansion.

use std::collections::HashSet;

use tessera_core::{EntityRef, TesseraResult, Window};
use tracing::trace;

use crate::graph::Snapshot;

/// Entities to add, hop by hop. Within a hop, entities follow graph order.
///
/// One hop crosses one node/edge boundary, so reaching a node two steps away
/// through an edge costs two hops. Stops early once a hop admits nothing.
pub(crate) fn expand(
    snapshot: &Snapshot,
    selected: &HashSet<EntityRef>,
    mut frontier: Vec<EntityRef>,
    hops: usize,
    window: Option<Window>,
) -> TesseraResult<Vec<EntityRef>> {
    let filter = snapshot.filter(window);
    let mut claimed: HashSet<EntityRef> = HashSet::new();
    let mut added = Vec::new();

    for hop in 0..hops {
        if frontier.is_empty() {
            break;
        }
        let mut next = Vec::new();
        for entity in &frontier {
            for neighbor in snapshot.graph.neighbors(entity)? {
                if selected.contains(&neighbor) || claimed.contains(&neighbor) {
                    continue;
                }
                if filter.admits_entity(&neighbor)? {
                    claimed.insert(neighbor.clone());
                    next.push(neighbor);
                }
            }
        }
        next.sort_by_key(|entity| snapshot.graph_order(entity));
        trace!(hop, admitted = next.len(), "expansion hop");
        added.extend(next.iter().cloned());
        frontier = next;
    }

    Ok(added)
}
