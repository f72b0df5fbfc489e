//! Integration tests for cache module
//!
//! Tests LRU eviction, TTL support and concurrent access

#![cfg(feature = "runtime")]

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use suggest_common::cache::{Cache, CacheConfig};
use suggest_common::time::MockClock;

/// Verifies basic cache operations (insert, get) with LRU eviction policy.
///
/// # Test Steps
/// 1. Insert 3 items into a cache with max size of 3
/// 2. Read key3 then key1 so key2 becomes least recently used
/// 3. Insert a 4th item, triggering eviction of key2
/// 4. Verify key1 and key3 remain, key2 is evicted, key4 is present
#[test]
fn test_lru_cache_basic_operations() {
    let config = CacheConfig::builder().max_size(3).track_metrics(true).build();
    let cache: Cache<String, i32> = Cache::new(config);

    cache.insert("key1".to_string(), 100);
    cache.insert("key2".to_string(), 200);
    cache.insert("key3".to_string(), 300);

    let _ = cache.get(&"key3".to_string());
    let _ = cache.get(&"key1".to_string());

    cache.insert("key4".to_string(), 400);

    assert_eq!(cache.get(&"key1".to_string()), Some(100));
    assert_eq!(cache.get(&"key2".to_string()), None);
    assert_eq!(cache.get(&"key3".to_string()), Some(300));
    assert_eq!(cache.get(&"key4".to_string()), Some(400));
    assert_eq!(cache.stats().evictions, 1);
}

/// Validates that a full cache evicts one entry per new key.
///
/// # Test Steps
/// 1. Fill a cache of size 2 with metrics enabled
/// 2. Insert three more distinct keys
/// 3. Verify the size stays at capacity and three evictions were counted
#[test]
fn test_lru_cache_stays_at_capacity() {
    let config = CacheConfig::builder().max_size(2).track_metrics(true).build();
    let cache: Cache<String, i32> = Cache::new(config);

    for i in 0..5 {
        cache.insert(format!("key-{i}"), i);
    }

    let stats = cache.stats();
    assert_eq!(stats.size, 2);
    assert_eq!(stats.max_size, Some(2));
    assert_eq!(stats.evictions, 3);
    assert_eq!(cache.get(&"key-4".to_string()), Some(4));
    assert_eq!(cache.get(&"key-0".to_string()), None);
}

/// Validates TTL combined with LRU using a mock clock.
///
/// # Test Steps
/// 1. Insert a payload into a TTL+LRU cache
/// 2. Advance the clock past the TTL
/// 3. Verify the entry is gone and the miss is recorded
#[test]
fn test_ttl_lru_expiry_with_mock_clock() {
    let clock = MockClock::new();
    let config = CacheConfig::builder()
        .max_size(4)
        .ttl(Duration::from_secs(30))
        .track_metrics(true)
        .build();
    let cache: Cache<String, String, MockClock> = Cache::with_clock(config, clock.clone());

    cache.insert("dataset/tz.json".to_string(), "[\"UTC\"]".to_string());
    clock.advance(Duration::from_secs(31));

    assert!(cache.get(&"dataset/tz.json".to_string()).is_none());
    let stats = cache.stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.expirations, 1);
    assert_eq!(stats.size, 0);
}

/// Verifies concurrent inserts from several threads are all retained.
///
/// # Test Steps
/// 1. Share one cache across ten threads
/// 2. Insert one distinct key per thread
/// 3. Verify every key is readable after the threads join
#[test]
fn test_concurrent_inserts() {
    let cache: Arc<Cache<String, usize>> = Arc::new(Cache::new(CacheConfig::builder().max_size(32).build()));

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                cache.insert(format!("key-{i}"), i);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 10);
    for i in 0..10 {
        assert_eq!(cache.get(&format!("key-{i}")), Some(i));
    }
}
