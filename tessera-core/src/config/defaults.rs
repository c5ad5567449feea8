pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 50;
pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 10_000;
pub const DEFAULT_PARALLEL_SCORING_THRESHOLD: usize = 1024;
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
pub const DEFAULT_LOG_LEVEL: &str = "info";
