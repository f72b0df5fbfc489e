//! Configuration structures
//!
//! Every field has a default so partial JSON/TOML files and environment
//! overrides can be layered on top of [`SuggestConfig::default`].

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FETCH_BACKOFF_MS, DEFAULT_FETCH_MAX_ATTEMPTS, DEFAULT_FETCH_TIMEOUT_SECS,
    DEFAULT_LOG_FILTER, DEFAULT_PAYLOAD_CACHE_ENTRIES,
};
use crate::errors::{Result, SuggestError};
use crate::types::SourceDescriptor;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    pub source: SourceDescriptor,
    pub fetch: FetchConfig,
    pub payload_cache: PayloadCacheConfig,
    pub logging: LoggingConfig,
}

impl SuggestConfig {
    /// Validates every section.
    ///
    /// # Errors
    /// Returns [`SuggestError::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        self.source.validate()?;
        if self.fetch.max_attempts == 0 {
            return Err(SuggestError::Config("fetch.max_attempts must be at least 1".to_string()));
        }
        if self.fetch.timeout_seconds == 0 {
            return Err(SuggestError::Config("fetch.timeout_seconds must be positive".to_string()));
        }
        if self.payload_cache.max_entries == 0 {
            return Err(SuggestError::Config(
                "payload_cache.max_entries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// How payloads are retrieved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_seconds: u64,
    pub max_attempts: u32,
    pub base_backoff_ms: u64,
    pub user_agent: Option<String>,
    /// Base directory for relative file identifiers.
    pub root_dir: Option<PathBuf>,
}

impl FetchConfig {
    /// Per-attempt timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// First retry delay as a `Duration`.
    pub fn base_backoff(&self) -> Duration {
        Duration::from_millis(self.base_backoff_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_FETCH_TIMEOUT_SECS,
            max_attempts: DEFAULT_FETCH_MAX_ATTEMPTS,
            base_backoff_ms: DEFAULT_FETCH_BACKOFF_MS,
            user_agent: None,
            root_dir: None,
        }
    }
}

/// Bounds for the raw payload cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadCacheConfig {
    pub max_entries: usize,
    /// `None` keeps payloads until evicted.
    pub ttl_seconds: Option<u64>,
}

impl PayloadCacheConfig {
    /// Payload lifetime, if one is set.
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl_seconds.map(Duration::from_secs)
    }
}

impl Default for PayloadCacheConfig {
    fn default() -> Self {
        Self { max_entries: DEFAULT_PAYLOAD_CACHE_ENTRIES, ttl_seconds: None }
    }
}

/// Tracing subscriber settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `suggest_core=debug`.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: DEFAULT_LOG_FILTER.to_string(), json: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SuggestConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fetch.timeout(), Duration::from_secs(30));
        assert_eq!(config.payload_cache.ttl(), None);
    }

    #[test]
    fn zero_attempts_rejected() {
        let mut config = SuggestConfig::default();
        config.fetch.max_attempts = 0;
        assert!(matches!(config.validate(), Err(SuggestError::Config(msg)) if msg.contains("max_attempts")));
    }

    #[test]
    fn nested_json_overrides_only_given_fields() {
        let config: SuggestConfig = serde_json::from_str(
            r#"{"source": {"identifier": "https://example.com/tz.json", "cache_enabled": false},
                "payload_cache": {"ttl_seconds": 60}}"#,
        )
        .expect("parse");

        assert_eq!(config.source.identifier, "https://example.com/tz.json");
        assert!(!config.source.cache_enabled);
        assert_eq!(config.source.default_max_results, 10);
        assert_eq!(config.payload_cache.ttl(), Some(Duration::from_secs(60)));
        assert_eq!(config.payload_cache.max_entries, 16);
        assert_eq!(config.logging.filter, "info");
    }
}
