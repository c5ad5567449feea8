//! Documents and the per-snapshot store that owns them.

pub mod template;

use std::collections::HashMap;

use tessera_core::traits::Embedding;
use tessera_core::{EntityKind, EntityRef, Lifespan};

/// Rendered text of one entity together with its embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub entity: EntityRef,
    pub content: String,
    pub embedding: Embedding,
    pub lifespan: Lifespan,
}

/// Immutable mapping from entity to its document, built once by vectorisation.
///
/// Documents are kept in graph order: every node document, then every edge
/// document. Entities whose template rendered nothing are absent.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
    index: HashMap<EntityRef, usize>,
    dimensions: Option<usize>,
}

impl DocumentStore {
    /// Build a store from documents in graph order. A later document for the
    /// same entity is ignored.
    pub(crate) fn from_documents(documents: Vec<Document>) -> Self {
        let mut store = Self {
            dimensions: documents.first().map(|doc| doc.embedding.len()),
            ..Self::default()
        };
        for document in documents {
            if store.index.contains_key(&document.entity) {
                continue;
            }
            store
                .index
                .insert(document.entity.clone(), store.documents.len());
            store.documents.push(document);
        }
        store
    }

    pub fn get(&self, entity: &EntityRef) -> Option<&Document> {
        self.index.get(entity).map(|&i| &self.documents[i])
    }

    pub fn contains(&self, entity: &EntityRef) -> bool {
        self.index.contains_key(entity)
    }

    /// All documents, nodes first.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Documents owned by entities of `kind`, or all of them.
    pub fn of_kind(&self, kind: Option<EntityKind>) -> impl Iterator<Item = &Document> + '_ {
        self.documents
            .iter()
            .filter(move |doc| kind.map_or(true, |k| doc.entity.kind() == k))
    }

    /// Dimensionality shared by every stored embedding.
    pub fn dimensions(&self) -> Option<usize> {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(entity: EntityRef, content: &str) -> Document {
        Document {
            entity,
            content: content.to_string(),
            embedding: vec![1.0, 0.0].into(),
            lifespan: Lifespan::Inherited,
        }
    }

    #[test]
    fn lookup_by_entity() {
        let store = DocumentStore::from_documents(vec![
            doc(EntityRef::node("a"), "a"),
            doc(EntityRef::edge("a", "b"), "a to b"),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.dimensions(), Some(2));
        assert_eq!(
            store.get(&EntityRef::edge("a", "b")).map(|d| d.content.as_str()),
            Some("a to b")
        );
        assert!(store.get(&EntityRef::node("b")).is_none());
    }

    #[test]
    fn one_document_per_entity() {
        let store = DocumentStore::from_documents(vec![
            doc(EntityRef::node("a"), "first"),
            doc(EntityRef::node("a"), "second"),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.documents()[0].content, "first");
    }

    #[test]
    fn filters_by_kind() {
        let store = DocumentStore::from_documents(vec![
            doc(EntityRef::node("a"), "a"),
            doc(EntityRef::node("b"), "b"),
            doc(EntityRef::edge("a", "b"), "ab"),
        ]);
        assert_eq!(store.of_kind(Some(EntityKind::Node)).count(), 2);
        assert_eq!(store.of_kind(Some(EntityKind::Edge)).count(), 1);
        assert_eq!(store.of_kind(None).count(), 3);
    }

    #[test]
    fn empty_store() {
        let store = DocumentStore::default();
        assert!(store.is_empty());
        assert_eq!(store.dimensions(), None);
    }
}
