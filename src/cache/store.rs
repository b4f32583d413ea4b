//! Cache Store Module
//!
//! Main cache engine combining recency-ordered storage with TTL expiration.

use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::cache::{
    CacheEntry, CacheStats, CacheStatsSnapshot, RecencyMap, DEFAULT_MAX_SIZE, DEFAULT_TTL,
};

// == Cache Store ==
/// Bounded key-value storage with LRU eviction and per-entry TTL.
///
/// The store is a single-owner structure: every method runs to completion
/// without yielding, so the capacity check and the insert/evict that follows
/// it are never interleaved with another operation.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Entries ordered from least to most recently used
    entries: RecencyMap<CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_size: usize,
    /// TTL applied when a caller does not pass one
    default_ttl: Duration,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with specified capacity and default TTL.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries; 0 is treated as 1
    /// * `default_ttl` - TTL for entries stored without an explicit one
    pub fn new(max_size: usize, default_ttl: Duration) -> Self {
        Self {
            entries: RecencyMap::new(),
            stats: CacheStats::new(),
            max_size: max_size.max(1),
            default_ttl,
        }
    }

    /// Creates a store with 1000 entries of capacity and a five minute TTL.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_MAX_SIZE, DEFAULT_TTL)
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A live entry is moved to the most recently used position and counted
    /// as a hit. A missing or expired entry is counted as a miss; an expired
    /// one is removed on the way out.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        self.lookup(key, |_| Some(()))?;
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Lookup ==
    /// Retrieves a value by key, projecting it through `project`.
    ///
    /// The lookup is a hit only when the entry is live and `project` yields a
    /// value. When `project` rejects a live entry the lookup is a miss and the
    /// recency order is left alone.
    pub fn lookup<R>(&mut self, key: &str, project: impl FnOnce(&V) -> Option<R>) -> Option<R> {
        let now = Instant::now();
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired_at(now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.set_size(self.entries.len());
            self.stats.record_miss();
            return None;
        }

        let projected = self
            .entries
            .get(key)
            .and_then(|entry| project(&entry.value));

        match projected {
            Some(value) => {
                self.entries.touch(key);
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists, the value and expiry are replaced and the key
    /// becomes the most recently used. If the store is full and the key is new,
    /// the least recently used entry is evicted first.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - TTL for this entry; `None` or zero uses the default TTL
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let key = key.into();
        let ttl = match ttl {
            Some(ttl) if !ttl.is_zero() => ttl,
            _ => self.default_ttl,
        };

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_size {
            self.evict_oldest();
        }

        self.entries.insert(key, CacheEntry::new(value, ttl));
        self.stats.set_size(self.entries.len());
    }

    // == Delete ==
    /// Removes an entry by key, returning whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_size(self.entries.len());
        removed
    }

    // == Delete Pattern ==
    /// Removes every key starting with `prefix`, returning the number removed.
    pub fn delete_pattern(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        self.stats.set_size(self.entries.len());
        before - self.entries.len()
    }

    // == Clear ==
    /// Removes all entries. Hit, miss and eviction counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_size(0);
    }

    // == Has ==
    /// Checks whether a live entry exists for `key`.
    ///
    /// Neither the recency order nor the hit/miss counters are affected. An
    /// expired entry found here is removed.
    pub fn has(&mut self, key: &str) -> bool {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => return false,
        };

        if expired {
            self.entries.remove(key);
            self.stats.set_size(self.entries.len());
        }
        !expired
    }

    // == Sweep Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed. Removals are not evictions.
    pub fn sweep_expired(&mut self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        self.stats.set_size(self.entries.len());
        before - self.entries.len()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot()
    }

    /// Iterates keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_size
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    // == Evict Oldest ==
    /// Removes exactly one entry, the least recently used.
    fn evict_oldest(&mut self) {
        if let Some((key, _)) = self.entries.pop_oldest() {
            self.stats.record_eviction();
            debug!(key = %key, "evicted least recently used entry");
        }
    }
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self::with_defaults()
    }
}
