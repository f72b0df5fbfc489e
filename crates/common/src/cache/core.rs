//! Core cache implementation
//!
//! This module provides a generic, thread-safe cache with least recently used
//! eviction and optional TTL expiration.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;

use super::config::CacheConfig;
use super::stats::{CacheStats, MetricsCollector};
use crate::time::{Clock, SystemClock};

/// Entry stored in the cache with its insertion time for TTL checks
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

#[derive(Debug)]
struct CacheStorage<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    /// Least recently used first
    access_order: Vec<K>,
}

impl<K, V> CacheStorage<K, V>
where
    K: Eq + Hash + Clone,
{
    fn new() -> Self {
        Self { entries: HashMap::new(), access_order: Vec::new() }
    }

    fn forget(&mut self, key: &K) -> Option<CacheEntry<V>> {
        self.access_order.retain(|k| k != key);
        self.entries.remove(key)
    }
}

/// Generic thread-safe LRU cache with optional TTL
///
/// Clones share the same storage and counters.
///
/// # Type Parameters
/// - `K`: Key type (must be `Eq + Hash + Clone`)
/// - `V`: Value type (must be `Clone`)
/// - `C`: Clock type for time-based operations (defaults to `SystemClock`)
///
/// # Example
/// ```
/// use suggest_common::cache::{Cache, CacheConfig};
///
/// let cache: Cache<String, String> = Cache::new(CacheConfig::builder().max_size(2).build());
/// cache.insert("tz".to_string(), "[\"Accra\"]".to_string());
/// assert_eq!(cache.get(&"tz".to_string()).as_deref(), Some("[\"Accra\"]"));
/// ```
pub struct Cache<K, V, C = SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    storage: Arc<RwLock<CacheStorage<K, V>>>,
    config: CacheConfig,
    metrics: MetricsCollector,
    clock: C,
}

impl<K, V> Cache<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a new cache with the given configuration using system clock
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<K, V, C> Cache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock + Clone,
{
    /// Create a new cache with a custom clock (useful for testing)
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            storage: Arc::new(RwLock::new(CacheStorage::new())),
            config,
            metrics: MetricsCollector::default(),
            clock,
        }
    }

    /// Insert a value into the cache
    ///
    /// If the cache is at capacity, the least recently used entry is
    /// evicted first.
    pub fn insert(&self, key: K, value: V) {
        let mut storage = self.storage.write();

        if let Some(max_size) = self.config.max_size {
            if storage.entries.len() >= max_size && !storage.entries.contains_key(&key) {
                self.evict_one(&mut storage);
            }
        }

        let entry = CacheEntry { value, inserted_at: self.clock.now() };
        storage.entries.insert(key.clone(), entry);
        storage.access_order.retain(|k| k != &key);
        storage.access_order.push(key);

        self.record(MetricsCollector::record_insert);
    }

    /// Get a value from the cache
    ///
    /// Returns `None` if the key doesn't exist or if the entry has expired.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut storage = self.storage.write();

        let expired = match (storage.entries.get(key), self.config.ttl) {
            (None, _) => {
                self.record(MetricsCollector::record_miss);
                return None;
            }
            (Some(entry), Some(ttl)) => self.clock.now().duration_since(entry.inserted_at) >= ttl,
            (Some(_), None) => false,
        };

        if expired {
            storage.forget(key);
            self.record(MetricsCollector::record_miss);
            self.record(MetricsCollector::record_expiration);
            return None;
        }

        let value = storage.entries.get(key).map(|entry| entry.value.clone());
        storage.access_order.retain(|k| k != key);
        storage.access_order.push(key.clone());

        self.record(MetricsCollector::record_hit);
        value
    }

    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.storage.read().entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        self.metrics.snapshot(self.len(), self.config.max_size)
    }

    fn record(&self, op: fn(&MetricsCollector)) {
        if self.config.track_metrics {
            op(&self.metrics);
        }
    }

    fn evict_one(&self, storage: &mut CacheStorage<K, V>) {
        if let Some(key) = storage.access_order.first().cloned() {
            storage.forget(&key);
            self.record(MetricsCollector::record_eviction);
            #[cfg(feature = "observability")]
            tracing::trace!(size = storage.entries.len(), "cache entry evicted");
        }
    }
}

impl<K, V, C> Clone for Cache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock + Clone,
{
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: self.config.clone(),
            metrics: self.metrics.clone(),
            clock: self.clock.clone(),
        }
    }
}

impl<K, V, C> std::fmt::Debug for Cache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("len", &self.storage.read().entries.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
