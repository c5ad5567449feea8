//! VectorSelection: an ordered, duplicate-free working set of entities.

mod item;

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tessera_core::{EntityRef, TesseraResult, Window};
use tessera_observability::expansion_span;
use tracing::debug;

use crate::document::Document;
use crate::expansion::{best_first, breadth};
use crate::graph::Snapshot;
use crate::query::Query;
use crate::target::SearchTarget;

pub use item::SelectedItem;

/// Entities chosen by searches, manual additions and expansions.
///
/// Each entity appears at most once and keeps the position of its first
/// insertion. With one document per entity, a selected document is
/// identified by its owner. Selections are independent values: mutating one
/// never affects another, even when both come from the same graph.
#[derive(Clone)]
pub struct VectorSelection {
    snapshot: Arc<Snapshot>,
    items: Vec<SelectedItem>,
    members: HashSet<EntityRef>,
}

impl VectorSelection {
    pub(crate) fn new(snapshot: Arc<Snapshot>) -> Self {
        Self {
            snapshot,
            items: Vec::new(),
            members: HashSet::new(),
        }
    }

    pub(crate) fn from_items(snapshot: Arc<Snapshot>, items: Vec<SelectedItem>) -> Self {
        let mut selection = Self::new(snapshot);
        for item in items {
            selection.push(item);
        }
        selection
    }

    /// Insert unless already present. Returns whether it was inserted.
    fn push(&mut self, item: SelectedItem) -> bool {
        if self.members.contains(&item.entity) {
            return false;
        }
        self.members.insert(item.entity.clone());
        self.items.push(item);
        true
    }

    /// Add nodes by name, in the given order, skipping ones already selected.
    ///
    /// All names are resolved first: an unknown name fails with
    /// `UnknownEntity` and leaves the selection untouched.
    pub fn add_nodes<I, S>(&mut self, names: I) -> TesseraResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let resolved = names
            .into_iter()
            .map(|name| self.snapshot.graph.resolve_node(name.as_ref()))
            .collect::<TesseraResult<Vec<_>>>()?;
        for entity in resolved {
            self.push(SelectedItem::unscored(entity));
        }
        Ok(())
    }

    /// Add edges by `(src, dst)`, with the same rules as [`Self::add_nodes`].
    pub fn add_edges<I, S, D>(&mut self, pairs: I) -> TesseraResult<()>
    where
        I: IntoIterator<Item = (S, D)>,
        S: AsRef<str>,
        D: AsRef<str>,
    {
        let resolved = pairs
            .into_iter()
            .map(|(src, dst)| self.snapshot.graph.resolve_edge(src.as_ref(), dst.as_ref()))
            .collect::<TesseraResult<Vec<_>>>()?;
        for entity in resolved {
            self.push(SelectedItem::unscored(entity));
        }
        Ok(())
    }

    /// Append `other`'s items after this selection's. Items already present
    /// keep their current position and score.
    pub fn append(&mut self, other: &VectorSelection) -> &mut Self {
        for item in &other.items {
            self.push(item.clone());
        }
        self
    }

    /// Selected node names, in selection order.
    pub fn nodes(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|item| item.entity.as_node().map(str::to_string))
            .collect()
    }

    /// Selected edges as `(src, dst)`, in selection order.
    pub fn edges(&self) -> Vec<(String, String)> {
        self.items
            .iter()
            .filter_map(|item| {
                item.entity
                    .as_edge()
                    .map(|(src, dst)| (src.to_string(), dst.to_string()))
            })
            .collect()
    }

    pub fn entities(&self) -> impl Iterator<Item = &EntityRef> + '_ {
        self.items.iter().map(|item| &item.entity)
    }

    pub fn items(&self) -> &[SelectedItem] {
        &self.items
    }

    pub fn contains(&self, entity: &EntityRef) -> bool {
        self.members.contains(entity)
    }

    /// Documents of the selected entities, in selection order. Entities
    /// without a document contribute nothing.
    pub fn get_documents(&self) -> Vec<&Document> {
        self.items
            .iter()
            .filter_map(|item| self.snapshot.store.get(&item.entity))
            .collect()
    }

    /// Documents with the score they were admitted with. The score is `None`
    /// for items added by hand or by breadth expansion.
    pub fn get_documents_with_scores(&self) -> Vec<(&Document, Option<f32>)> {
        self.items
            .iter()
            .filter_map(|item| {
                self.snapshot
                    .store
                    .get(&item.entity)
                    .map(|document| (document, item.score))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Grow the selection breadth-first for up to `hops` node/edge steps.
    ///
    /// Every selected entity starts the frontier; each hop admits the
    /// window-eligible unselected neighbours of the frontier, which become
    /// the next frontier.
    pub fn expand(&mut self, hops: usize, window: Option<Window>) -> TesseraResult<()> {
        let span = expansion_span!("breadth", hops);
        let _guard = span.enter();

        let frontier: Vec<EntityRef> = self.entities().cloned().collect();
        let added = breadth::expand(&self.snapshot, &self.members, frontier, hops, window)?;
        let count = added.len();
        for entity in added {
            self.push(SelectedItem::unscored(entity));
        }
        debug!(added = count, total = self.len(), "breadth expansion complete");
        Ok(())
    }

    /// Add up to `limit` entities reachable from the selection, always taking
    /// the most similar frontier entity next.
    pub fn expand_entities_by_similarity<Q: Into<Query>>(
        &mut self,
        query: Q,
        limit: usize,
        window: Option<Window>,
    ) -> TesseraResult<()> {
        self.expand_by_similarity(SearchTarget::Entities, query.into(), limit, window)
    }

    /// As [`Self::expand_entities_by_similarity`], admitting only nodes.
    /// Edges are still walked through.
    pub fn expand_nodes_by_similarity<Q: Into<Query>>(
        &mut self,
        query: Q,
        limit: usize,
        window: Option<Window>,
    ) -> TesseraResult<()> {
        self.expand_by_similarity(SearchTarget::Nodes, query.into(), limit, window)
    }

    /// As [`Self::expand_entities_by_similarity`], admitting only edges.
    /// Nodes are still walked through.
    pub fn expand_edges_by_similarity<Q: Into<Query>>(
        &mut self,
        query: Q,
        limit: usize,
        window: Option<Window>,
    ) -> TesseraResult<()> {
        self.expand_by_similarity(SearchTarget::Edges, query.into(), limit, window)
    }

    /// Best-first expansion at document granularity: `limit` counts
    /// documents, and only window-eligible documents are candidates.
    pub fn expand_documents_by_similarity<Q: Into<Query>>(
        &mut self,
        query: Q,
        limit: usize,
        window: Option<Window>,
    ) -> TesseraResult<()> {
        self.expand_by_similarity(SearchTarget::Documents, query.into(), limit, window)
    }

    fn expand_by_similarity(
        &mut self,
        target: SearchTarget,
        query: Query,
        limit: usize,
        window: Option<Window>,
    ) -> TesseraResult<()> {
        let span = expansion_span!(target, limit);
        let _guard = span.enter();

        // No frontier without a selection.
        if self.is_empty() || limit == 0 {
            return Ok(());
        }
        let Some(query) = self.snapshot.query_vector(query)? else {
            return Ok(());
        };

        let seeds: Vec<EntityRef> = self.entities().cloned().collect();
        let added = best_first::expand(
            &self.snapshot,
            &self.members,
            &seeds,
            &query,
            limit,
            window,
            target,
        )?;
        let count = added.len();
        for (entity, score) in added {
            self.push(SelectedItem::scored(entity, score));
        }
        debug!(%target, added = count, total = self.len(), "similarity expansion complete");
        Ok(())
    }
}

impl fmt::Debug for VectorSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorSelection")
            .field("items", &self.items)
            .finish()
    }
}
