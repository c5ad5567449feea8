/// Tessera version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of texts sent to the embedding provider in a single call.
pub const MAX_EMBEDDING_BATCH_SIZE: usize = 10_000;

/// Separator used when an edge is displayed or rendered by name.
pub const EDGE_NAME_SEPARATOR: &str = "->";
