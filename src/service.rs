//! Cache Service
//!
//! Shared, typed front end over a [`CacheStore`]. A `CacheService` is built
//! once at startup and cloned into every consumer; clones share one store.

use std::any::{self, Any};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use std::time::Duration;

use tracing::{error, info, warn};

use crate::cache::{CacheStatsSnapshot, CacheStore};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_sweep_thread;

/// Type-erased value as held by the store.
pub type CachedValue = Arc<dyn Any + Send + Sync>;

static GLOBAL: OnceLock<CacheService> = OnceLock::new();

// == Cache Service ==
/// Cloneable handle to a process-wide LRU/TTL cache.
///
/// The store lock is only ever held for the duration of one synchronous store
/// call and never across an `.await`.
#[derive(Debug, Clone)]
pub struct CacheService {
    store: Arc<Mutex<CacheStore<CachedValue>>>,
}

impl CacheService {
    // == Constructors ==
    /// Creates a new service with its own store.
    pub fn new(max_size: usize, default_ttl: Duration) -> Self {
        Self {
            store: Arc::new(Mutex::new(CacheStore::new(max_size, default_ttl))),
        }
    }

    /// Creates a new service from configuration. No sweep task is started.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_size, config.default_ttl)
    }

    // == Default Instance ==
    /// Returns the default process-wide instance, created with default settings
    /// on first use.
    ///
    /// Equivalent to constructing one service at startup and sharing it
    /// everywhere; prefer passing a [`CacheService`] explicitly.
    pub fn global() -> &'static CacheService {
        Self::global_with(&Config::default())
    }

    /// Returns the default process-wide instance, creating it from `config` if
    /// this is the first call. Later calls ignore `config`.
    ///
    /// The instance sweeps expired entries on its own `cache-sweep` thread, so
    /// the sweep does not depend on whichever runtime (if any) made the first
    /// call.
    pub fn global_with(config: &Config) -> &'static CacheService {
        GLOBAL.get_or_init(|| {
            let service = Self::from_config(config);
            info!(
                max_size = config.max_size,
                default_ttl_ms = config.default_ttl.as_millis() as u64,
                "default cache instance created"
            );

            if let Some(interval) = config.sweep_interval.filter(|i| !i.is_zero()) {
                // Detached: the default instance is never torn down
                if let Err(e) = spawn_sweep_thread(service.clone(), interval) {
                    error!("failed to start default cache sweep thread: {}", e);
                }
            }
            service
        })
    }

    // == Get ==
    /// Retrieves a value of type `T`.
    ///
    /// A value stored under `key` with a different type is reported as a miss.
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let mut mismatched = false;
        let found = self.lock().lookup(key, |value| {
            let typed = Arc::clone(value).downcast::<T>().ok();
            mismatched = typed.is_none();
            typed
        });

        if mismatched {
            warn!(
                key,
                expected = any::type_name::<T>(),
                "cached value has a different type, treating as miss"
            );
        }
        found
    }

    // == Set ==
    /// Stores `value` under `key`; `None` TTL uses the store default.
    pub fn set<T: Any + Send + Sync>(&self, key: impl Into<String>, value: T, ttl: Option<Duration>) {
        self.set_shared(key, Arc::new(value), ttl);
    }

    /// Stores an already shared value without re-wrapping it.
    pub fn set_shared<T: Any + Send + Sync>(
        &self,
        key: impl Into<String>,
        value: Arc<T>,
        ttl: Option<Duration>,
    ) {
        let value: CachedValue = value;
        self.lock().set(key, value, ttl);
    }

    // == Get Or Set ==
    /// Returns the cached value for `key`, or runs `factory`, caches its
    /// output and returns it.
    ///
    /// Factory errors are returned unchanged and nothing is cached. Concurrent
    /// misses on the same key each run their own factory; the last one to
    /// finish wins.
    pub async fn get_or_set<T, E, F, Fut>(
        &self,
        key: &str,
        factory: F,
        ttl: Option<Duration>,
    ) -> std::result::Result<Arc<T>, E>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        if let Some(cached) = self.get::<T>(key) {
            return Ok(cached);
        }

        let value = Arc::new(factory().await?);
        self.set_shared(key, Arc::clone(&value), ttl);
        Ok(value)
    }

    // == Invalidation ==
    /// Removes one key, returning whether it was present.
    pub fn delete(&self, key: &str) -> bool {
        self.lock().delete(key)
    }

    /// Removes every key starting with `prefix`, returning the count.
    pub fn delete_pattern(&self, prefix: &str) -> usize {
        self.lock().delete_pattern(prefix)
    }

    /// Removes all entries; counters are kept.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Checks for a live entry without touching recency or counters.
    pub fn has(&self, key: &str) -> bool {
        self.lock().has(key)
    }

    /// Removes expired entries, returning how many were removed.
    pub fn sweep_expired(&self) -> usize {
        self.lock().sweep_expired()
    }

    // == Stats ==
    /// Returns current statistics.
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.lock().stats()
    }

    /// Returns current statistics, or an error if the store can no longer be
    /// trusted because a holder of its lock panicked.
    pub fn try_stats(&self) -> Result<CacheStatsSnapshot> {
        self.store
            .lock()
            .map(|store| store.stats())
            .map_err(|_| CacheError::Unavailable("cache lock poisoned".to_string()))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    fn lock(&self) -> MutexGuard<'_, CacheStore<CachedValue>> {
        self.store.lock().unwrap_or_else(|poisoned| {
            warn!("cache lock poisoned, continuing with recovered state");
            poisoned.into_inner()
        })
    }
}

impl Default for CacheService {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
