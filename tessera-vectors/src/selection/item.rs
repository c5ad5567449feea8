use tessera_core::EntityRef;

/// One selected entity and the similarity it was admitted with, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedItem {
    pub entity: EntityRef,
    pub score: Option<f32>,
}

impl SelectedItem {
    pub fn scored(entity: EntityRef, score: f32) -> Self {
        Self {
            entity,
            score: Some(score),
        }
    }

    pub fn unscored(entity: EntityRef) -> Self {
        Self {
            entity,
            score: None,
        }
    }
}
