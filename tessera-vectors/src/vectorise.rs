//! Render → embed → store.

use tessera_core::traits::{DocumentInput, EntityProperties, IDocumentTemplate, IGraphView};
use tessera_core::{EntityRef, TesseraResult};
use tessera_embeddings::EmbeddingEngine;
use tessera_observability::vectorise_span;
use tracing::{debug, info};

use crate::document::{Document, DocumentStore};

/// Build the document store for every entity of `graph`.
///
/// Nodes are rendered before edges, each in graph order. Entities whose
/// template yields nothing (or only whitespace) get no document. All texts go
/// through the embedding engine in one call, so a failing batch fails the
/// whole vectorisation and no store is produced.
pub fn build_store(
    graph: &dyn IGraphView,
    template: &dyn IDocumentTemplate,
    engine: &EmbeddingEngine,
) -> TesseraResult<DocumentStore> {
    let nodes = graph.nodes();
    let edges = graph.edges();
    let span = vectorise_span!(nodes.len(), edges.len());
    let _guard = span.enter();

    let mut rendered: Vec<(EntityRef, DocumentInput)> = Vec::with_capacity(nodes.len() + edges.len());
    for node in nodes {
        let input = EntityProperties {
            properties: graph.properties(&node)?,
            entity: node,
        };
        if let Some(doc) = template.node(&input).filter(has_text) {
            rendered.push((input.entity, doc));
        }
    }
    for edge in edges {
        let input = EntityProperties {
            properties: graph.properties(&edge)?,
            entity: edge,
        };
        if let Some(doc) = template.edge(&input).filter(has_text) {
            rendered.push((input.entity, doc));
        }
    }
    debug!(documents = rendered.len(), "templates rendered");

    let texts: Vec<String> = rendered.iter().map(|(_, doc)| doc.content.clone()).collect();
    let embeddings = engine.embed_texts(&texts)?;

    let documents: Vec<Document> = rendered
        .into_iter()
        .zip(embeddings)
        .map(|((entity, input), embedding)| Document {
            entity,
            content: input.content,
            embedding,
            lifespan: input.lifespan,
        })
        .collect();

    let store = DocumentStore::from_documents(documents);
    info!(
        documents = store.len(),
        dimensions = store.dimensions().unwrap_or(0),
        "vectorisation complete"
    );
    Ok(store)
}

fn has_text(doc: &DocumentInput) -> bool {
    !doc.content.trim().is_empty()
}
