//! Generic in-memory cache with LRU eviction and TTL expiration
//!
//! # Features
//!
//! - **Thread-safe**: storage sits behind `Arc<RwLock<..>>`; clones share it
//! - **Bounded**: the least recently used entry is evicted at capacity
//! - **TTL support**: entries expire lazily on read
//! - **Metrics tracking**: optional hit/miss/eviction statistics
//! - **Testable**: clock abstraction for deterministic time-based tests
//!
//! # Example
//! ```
//! use std::time::Duration;
//!
//! use suggest_common::cache::{Cache, CacheConfig};
//!
//! let config = CacheConfig::builder()
//!     .max_size(16)
//!     .ttl(Duration::from_secs(300))
//!     .track_metrics(true)
//!     .build();
//! let cache: Cache<String, String> = Cache::new(config);
//!
//! cache.insert("dataset/tz.json".to_string(), "[]".to_string());
//! assert!(cache.get(&"dataset/tz.json".to_string()).is_some());
//! assert_eq!(cache.stats().hits, 1);
//! ```

mod config;
mod core;
mod stats;

pub use config::{CacheConfig, CacheConfigBuilder};
pub use self::core::Cache;
pub use stats::CacheStats;
