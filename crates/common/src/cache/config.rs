//! Cache configuration and builder

use std::time::Duration;

/// Configuration for cache behavior
#[derive(Debug, Clone, Default)]
pub struct CacheConfig {
    /// Maximum number of entries (None = unlimited); the least recently used
    /// entry is evicted once it is reached
    pub max_size: Option<usize>,

    /// Time-to-live for entries (None = no expiration)
    pub ttl: Option<Duration>,

    /// Whether to collect hit/miss/eviction counters
    pub track_metrics: bool,
}

impl CacheConfig {
    /// Create a new configuration builder
    pub fn builder() -> CacheConfigBuilder {
        CacheConfigBuilder::default()
    }
}

/// Builder for CacheConfig with fluent API
#[derive(Debug, Default)]
pub struct CacheConfigBuilder {
    config: CacheConfig,
}

impl CacheConfigBuilder {
    /// Set maximum number of entries
    pub fn max_size(mut self, size: usize) -> Self {
        self.config.max_size = Some(size);
        self
    }

    /// Set time-to-live for entries
    pub fn ttl(mut self, duration: Duration) -> Self {
        self.config.ttl = Some(duration);
        self
    }

    /// Set time-to-live when one is given
    pub fn maybe_ttl(mut self, duration: Option<Duration>) -> Self {
        self.config.ttl = duration;
        self
    }

    /// Enable or disable metrics tracking
    pub fn track_metrics(mut self, enabled: bool) -> Self {
        self.config.track_metrics = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> CacheConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for cache::config.
    use super::*;

    /// Validates `CacheConfig::default` behavior for the cache config default
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures `config.max_size.is_none()` evaluates to true.
    /// - Ensures `config.ttl.is_none()` evaluates to true.
    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert!(config.max_size.is_none());
        assert!(config.ttl.is_none());
        assert!(!config.track_metrics);
    }

    /// Validates `CacheConfig::builder` behavior for the optional ttl
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms `maybe_ttl(None)` leaves entries without expiry.
    /// - Confirms the remaining builder settings are applied.
    #[test]
    fn test_cache_config_builder_optional_ttl() {
        let config = CacheConfig::builder()
            .max_size(8)
            .maybe_ttl(None)
            .track_metrics(true)
            .build();

        assert_eq!(config.max_size, Some(8));
        assert!(config.ttl.is_none());
        assert!(config.track_metrics);
    }

    #[test]
    fn test_cache_config_builder_ttl() {
        let config = CacheConfig::builder().ttl(Duration::from_secs(60)).max_size(4).build();
        assert_eq!(config.ttl, Some(Duration::from_secs(60)));
        assert_eq!(config.max_size, Some(4));
    }
}
