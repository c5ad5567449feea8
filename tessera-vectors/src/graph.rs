//! VectorisedGraph: the query surface over a vectorised snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use tessera_core::config::SearchConfig;
use tessera_core::traits::{Embedding, IDocumentTemplate, IEmbeddingProvider, IGraphView};
use tessera_core::{EmbeddingError, EntityRef, TesseraConfig, TesseraResult, Window};
use tessera_embeddings::EmbeddingEngine;
use tessera_observability::search_span;
use tracing::debug;

use crate::document::{Document, DocumentStore};
use crate::query::Query;
use crate::selection::{SelectedItem, VectorSelection};
use crate::similarity::{is_zero, score_documents, top_k};
use crate::target::SearchTarget;
use crate::vectorise;
use crate::window_filter::WindowFilter;

/// Everything a query needs, frozen at vectorisation time and shared by
/// every selection derived from it.
pub(crate) struct Snapshot {
    pub(crate) graph: Arc<dyn IGraphView>,
    pub(crate) store: DocumentStore,
    pub(crate) embeddings: EmbeddingEngine,
    pub(crate) search: SearchConfig,
    /// Graph iteration position of every entity: nodes, then edges.
    order: HashMap<EntityRef, usize>,
}

impl Snapshot {
    pub(crate) fn filter(&self, window: Option<Window>) -> WindowFilter<'_> {
        WindowFilter::new(self.graph.as_ref(), window)
    }

    pub(crate) fn graph_order(&self, entity: &EntityRef) -> usize {
        self.order.get(entity).copied().unwrap_or(usize::MAX)
    }

    /// Embed (if needed) and validate a query. `None` for a zero vector,
    /// which has no similarity to anything.
    pub(crate) fn query_vector(&self, query: Query) -> TesseraResult<Option<Embedding>> {
        let vector: Embedding = match query {
            Query::Text(text) => self.embeddings.embed_query(&text)?,
            Query::Vector(vector) => vector.into(),
        };
        if let Some(expected) = self.store.dimensions() {
            if vector.len() != expected {
                return Err(EmbeddingError::DimensionMismatch {
                    expected,
                    actual: vector.len(),
                }
                .into());
            }
        }
        if is_zero(&vector) {
            debug!("zero query vector");
            return Ok(None);
        }
        Ok(Some(vector))
    }
}

/// A graph whose entities carry embedded documents.
///
/// Cheap to clone; clones and all selections share one snapshot.
#[derive(Clone)]
pub struct VectorisedGraph {
    snapshot: Arc<Snapshot>,
}

impl VectorisedGraph {
    /// Render, embed and store one document per entity of `graph`.
    pub fn vectorise<G>(
        graph: Arc<G>,
        provider: Arc<dyn IEmbeddingProvider>,
        template: &dyn IDocumentTemplate,
        config: &TesseraConfig,
    ) -> TesseraResult<Self>
    where
        G: IGraphView + 'static,
    {
        config.validate()?;
        let graph: Arc<dyn IGraphView> = graph;
        let embeddings = EmbeddingEngine::new(provider, config.embedding.clone());
        let store = vectorise::build_store(graph.as_ref(), template, &embeddings)?;
        let order = graph
            .nodes()
            .into_iter()
            .chain(graph.edges())
            .enumerate()
            .map(|(i, entity)| (entity, i))
            .collect();

        Ok(Self {
            snapshot: Arc::new(Snapshot {
                graph,
                store,
                embeddings,
                search: config.search.clone(),
                order,
            }),
        })
    }

    pub fn empty_selection(&self) -> VectorSelection {
        VectorSelection::new(Arc::clone(&self.snapshot))
    }

    /// Top `limit` nodes by similarity of their document to `query`.
    pub fn nodes_by_similarity<Q: Into<Query>>(
        &self,
        query: Q,
        limit: usize,
        window: Option<Window>,
    ) -> TesseraResult<VectorSelection> {
        self.search(SearchTarget::Nodes, query.into(), limit, window)
    }

    pub fn edges_by_similarity<Q: Into<Query>>(
        &self,
        query: Q,
        limit: usize,
        window: Option<Window>,
    ) -> TesseraResult<VectorSelection> {
        self.search(SearchTarget::Edges, query.into(), limit, window)
    }

    /// Top `limit` nodes and edges, ranked together.
    pub fn entities_by_similarity<Q: Into<Query>>(
        &self,
        query: Q,
        limit: usize,
        window: Option<Window>,
    ) -> TesseraResult<VectorSelection> {
        self.search(SearchTarget::Entities, query.into(), limit, window)
    }

    /// Top `limit` documents, whatever entity owns them.
    pub fn documents_by_similarity<Q: Into<Query>>(
        &self,
        query: Q,
        limit: usize,
        window: Option<Window>,
    ) -> TesseraResult<VectorSelection> {
        self.search(SearchTarget::Documents, query.into(), limit, window)
    }

    fn search(
        &self,
        target: SearchTarget,
        query: Query,
        limit: usize,
        window: Option<Window>,
    ) -> TesseraResult<VectorSelection> {
        let span = search_span!(target, limit);
        let _guard = span.enter();

        let snapshot = &self.snapshot;
        let Some(query) = snapshot.query_vector(query)? else {
            return Ok(self.empty_selection());
        };

        let filter = snapshot.filter(window);
        let mut candidates: Vec<&Document> = Vec::new();
        for document in snapshot.store.of_kind(target.kind()) {
            if filter.admits_document(document)? {
                candidates.push(document);
            }
        }

        let ranked = top_k(
            score_documents(&query, &candidates, snapshot.search.parallel_scoring_threshold),
            limit,
        );
        debug!(
            candidates = candidates.len(),
            selected = ranked.len(),
            "similarity search complete"
        );

        let items = ranked
            .into_iter()
            .map(|scored| SelectedItem::scored(scored.item.entity.clone(), scored.score))
            .collect();
        Ok(VectorSelection::from_items(Arc::clone(snapshot), items))
    }

    /// All documents of the snapshot, nodes first.
    pub fn documents(&self) -> &[Document] {
        self.snapshot.store.documents()
    }

    pub fn document(&self, entity: &EntityRef) -> Option<&Document> {
        self.snapshot.store.get(entity)
    }

    /// Result size to use when the caller has no preference.
    pub fn default_limit(&self) -> usize {
        self.snapshot.search.default_limit
    }

    pub fn embedding_provider(&self) -> &str {
        self.snapshot.embeddings.provider_name()
    }
}

impl std::fmt::Debug for VectorisedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorisedGraph")
            .field("documents", &self.snapshot.store.len())
            .field("provider", &self.snapshot.embeddings.provider_name())
            .finish()
    }
}
