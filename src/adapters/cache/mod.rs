//! In-memory caching layer for hot-path credential reads.
//!
//! Uses `moka` for bounded concurrent caching. The cache holds plain
//! username-to-secret entries and is mutated only by the coordinator.

pub mod memory_cache;

pub use memory_cache::InMemoryCache;
