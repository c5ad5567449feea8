//! # tessera-observability
//!
//! Subscriber initialisation from [`ObservabilityConfig`](tessera_core::config::ObservabilityConfig)
//! and span definitions for vectorisation, search, expansion, and embedding.

pub mod tracing_setup;

pub use tracing_setup::init_tracing;
pub use tracing_setup::spans::names;
