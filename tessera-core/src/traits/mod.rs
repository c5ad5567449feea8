mod embedding;
mod graph;
mod template;

pub use embedding::{Embedding, IEmbeddingProvider};
pub use graph::IGraphView;
pub use template::{DocumentInput, EntityProperties, IDocumentTemplate};
