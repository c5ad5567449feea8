//! Span definitions per operation: vectorise, search, expansion, embedding.

/// Create a vectorisation span.
#[macro_export]
macro_rules! vectorise_span {
    ($nodes:expr, $edges:expr) => {
        tracing::info_span!("tessera.vectorise", nodes = $nodes, edges = $edges)
    };
}

/// Create a similarity search span.
#[macro_export]
macro_rules! search_span {
    ($target:expr, $limit:expr) => {
        tracing::debug_span!("tessera.search", target = %$target, limit = $limit)
    };
}

/// Create a selection expansion span.
#[macro_export]
macro_rules! expansion_span {
    ($kind:expr, $budget:expr) => {
        tracing::debug_span!("tessera.expansion", kind = %$kind, budget = $budget)
    };
}

/// Create an embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $texts:expr) => {
        tracing::debug_span!("tessera.embedding", provider = %$provider, texts = $texts)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const VECTORISE: &str = "tessera.vectorise";
    pub const SEARCH: &str = "tessera.search";
    pub const EXPANSION: &str = "tessera.expansion";
    pub const EMBEDDING: &str = "tessera.embedding";

    pub const ALL: [&str; 4] = [VECTORISE, SEARCH, EXPANSION, EMBEDDING];
}
