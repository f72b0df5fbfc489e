//! Application context - dependency injection container

use std::sync::Arc;

use suggest_core::source::payload_cache;
use suggest_core::{Fetcher, SourceManager, SuggestionService};
use suggest_domain::{Result, SuggestConfig};
use suggest_infra::RoutingFetcher;

/// Application context - holds all services and dependencies
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: SuggestConfig,
    pub sources: Arc<SourceManager>,
    pub suggestions: SuggestionService,
}

impl AppContext {
    /// Wire the routing fetcher, source manager and suggestion service for
    /// `config`.
    ///
    /// # Errors
    /// Returns `SuggestError::Config` if the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: SuggestConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = RoutingFetcher::from_config(&config.fetch)?;
        Self::with_fetcher(config, Arc::new(fetcher))
    }

    /// Same wiring with a caller-supplied fetcher.
    ///
    /// # Errors
    /// Returns `SuggestError::Config` if the configuration is invalid.
    pub fn with_fetcher(config: SuggestConfig, fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        config.validate()?;

        let sources = Arc::new(
            SourceManager::new(fetcher).with_payload_cache(payload_cache(&config.payload_cache)),
        );
        let suggestions = SuggestionService::new(Arc::clone(&sources), config.source.clone())?;

        tracing::debug!(
            source = %config.source.identifier,
            cache_enabled = config.source.cache_enabled,
            "application context ready"
        );

        Ok(Self { config, sources, suggestions })
    }
}
