//! Temporal admission predicate.
//!
//! Applied when a candidate is about to enter a selection, never to items
//! already selected.

use tessera_core::traits::IGraphView;
use tessera_core::{EntityRef, TesseraResult, Window};

use crate::document::Document;

/// Eligibility of entities and documents under an optional window.
#[derive(Clone, Copy)]
pub struct WindowFilter<'a> {
    graph: &'a dyn IGraphView,
    window: Option<Window>,
}

impl<'a> WindowFilter<'a> {
    pub fn new(graph: &'a dyn IGraphView, window: Option<Window>) -> Self {
        Self { graph, window }
    }

    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// Entity existence in the window. Always true without a window.
    pub fn admits_entity(&self, entity: &EntityRef) -> TesseraResult<bool> {
        match &self.window {
            None => Ok(true),
            Some(window) => self.graph.exists_in_window(entity, window),
        }
    }

    /// The document's own lifespan against the window, ignoring its owner.
    pub fn admits_lifespan(&self, document: &Document) -> bool {
        self.window
            .as_ref()
            .map_or(true, |window| document.lifespan.overlaps(window))
    }

    /// Owner exists in the window and the document's lifespan overlaps it.
    pub fn admits_document(&self, document: &Document) -> TesseraResult<bool> {
        Ok(self.admits_lifespan(document) && self.admits_entity(&document.entity)?)
    }
}
