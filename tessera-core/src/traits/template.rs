use crate::entity::EntityRef;
use crate::prop::Properties;
use crate::time::Lifespan;

/// Everything a template can see about one entity.
#[derive(Debug, Clone)]
pub struct EntityProperties {
    pub entity: EntityRef,
    pub properties: Properties,
}

/// Rendered text for one document, before embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInput {
    pub content: String,
    pub lifespan: Lifespan,
}

impl DocumentInput {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            lifespan: Lifespan::Inherited,
        }
    }

    pub fn with_lifespan(mut self, lifespan: Lifespan) -> Self {
        self.lifespan = lifespan;
        self
    }
}

/// Turns entity properties into document text. `None` means the entity gets
/// no document.
pub trait IDocumentTemplate: Send + Sync {
    fn node(&self, node: &EntityProperties) -> Option<DocumentInput>;

    fn edge(&self, edge: &EntityProperties) -> Option<DocumentInput>;
}
