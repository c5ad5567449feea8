//! # tessera-core
//!
//! Foundation crate for the Tessera vector graph engine.
//! Defines entity references, property values, time windows, the traits at
//! the collaborator seams (graph, embeddings, templates), errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod entity;
pub mod errors;
pub mod prop;
pub mod time;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TesseraConfig;
pub use entity::{EntityKind, EntityRef};
pub use errors::{EmbeddingError, TesseraError, TesseraResult};
pub use prop::{Prop, Properties};
pub use time::{IntoTime, Lifespan, Window};
