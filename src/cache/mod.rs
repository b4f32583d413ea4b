//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and LRU eviction.

use std::time::Duration;

mod entry;
mod keys;
mod lru;
mod stats;
mod store;
mod ttl;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use keys::CacheKeys;
pub use lru::RecencyMap;
pub use stats::{CacheStats, CacheStatsSnapshot};
pub use store::CacheStore;
pub use ttl::CacheTtl;

// == Public Constants ==
/// Default maximum number of entries
pub const DEFAULT_MAX_SIZE: usize = 1000;

/// Default time-to-live for entries stored without one
pub const DEFAULT_TTL: Duration = CacheTtl::MEDIUM;

/// Default interval between expiry sweeps
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);
