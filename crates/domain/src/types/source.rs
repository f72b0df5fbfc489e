//! Source descriptors: which dataset to load and how to serve it

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CACHE_ENABLED, DEFAULT_MAX_RESULTS, DEFAULT_SOURCE_IDENTIFIER};
use crate::errors::{Result, SuggestError};

/// Describes one dataset source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceDescriptor {
    /// Opaque locator handed to the fetcher (URL or path).
    pub identifier: String,
    /// Whether a previously fetched payload may be reused without fetching.
    pub cache_enabled: bool,
    /// Result cap used when a caller does not supply one.
    pub default_max_results: usize,
}

impl SourceDescriptor {
    /// Descriptor for `identifier` with default cache and result settings.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), ..Self::default() }
    }

    /// Enable or disable the raw payload cache for this source.
    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Cap applied when a query omits `max_results`.
    pub fn with_default_max_results(mut self, max: usize) -> Self {
        self.default_max_results = max;
        self
    }

    /// Checks the descriptor can be used to load a source.
    ///
    /// # Errors
    /// Returns [`SuggestError::Config`] for a blank identifier or a zero
    /// result cap.
    pub fn validate(&self) -> Result<()> {
        if self.identifier.trim().is_empty() {
            return Err(SuggestError::Config("source identifier is required".to_string()));
        }
        if self.default_max_results == 0 {
            return Err(SuggestError::Config(format!(
                "default_max_results must be positive for {}",
                self.identifier
            )));
        }
        Ok(())
    }
}

impl Default for SourceDescriptor {
    fn default() -> Self {
        Self {
            identifier: DEFAULT_SOURCE_IDENTIFIER.to_string(),
            cache_enabled: DEFAULT_CACHE_ENABLED,
            default_max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_time_zone_dataset() {
        let descriptor = SourceDescriptor::default();
        assert_eq!(descriptor.identifier, "dataset/tz.json");
        assert!(descriptor.cache_enabled);
        assert_eq!(descriptor.default_max_results, 10);
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn blank_identifier_is_a_config_error() {
        let err = SourceDescriptor::new("   ").validate().expect_err("blank identifier");
        assert!(matches!(err, SuggestError::Config(_)));
    }

    #[test]
    fn zero_result_cap_is_a_config_error() {
        let descriptor = SourceDescriptor::new("tz").with_default_max_results(0);
        assert!(matches!(descriptor.validate(), Err(SuggestError::Config(_))));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let descriptor: SourceDescriptor =
            toml::from_str("identifier = \"cities.json\"").expect("parse");
        assert_eq!(descriptor.identifier, "cities.json");
        assert_eq!(descriptor.default_max_results, 10);
    }
}
