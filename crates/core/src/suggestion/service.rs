//! Suggestion service - queries the default source through the manager

use std::collections::HashSet;
use std::sync::Arc;

use suggest_domain::{Result, SourceDescriptor, SuggestError};
use tracing::debug;

use crate::matching::{validate_max_results, validate_query, Matcher};
use crate::source::{Acquired, SourceManager};

/// Facade exposing suggestion and exact-match queries.
///
/// A ready matcher is queried without suspending; otherwise the request
/// attaches to the source manager's load for that source.
#[derive(Debug, Clone)]
pub struct SuggestionService {
    sources: Arc<SourceManager>,
    default_source: SourceDescriptor,
}

impl SuggestionService {
    /// Create a service answering from `default_source`.
    ///
    /// # Errors
    /// Returns `SuggestError::Config` if the descriptor is invalid.
    pub fn new(sources: Arc<SourceManager>, default_source: SourceDescriptor) -> Result<Self> {
        default_source.validate()?;
        Ok(Self { sources, default_source })
    }

    /// Descriptor used by the default-source queries.
    pub fn default_source(&self) -> &SourceDescriptor {
        &self.default_source
    }

    /// Manager shared with any other service over the same sources.
    pub fn sources(&self) -> &Arc<SourceManager> {
        &self.sources
    }

    /// Starts loading the default source in the background.
    ///
    /// Returns immediately. A failed preload leaves the source unloaded and
    /// the next query retries it.
    ///
    /// # Errors
    /// Returns `SuggestError::Internal` when called outside a Tokio runtime.
    pub fn preload(&self) -> Result<()> {
        tokio::runtime::Handle::try_current()
            .map_err(|e| SuggestError::Internal(format!("preload needs a Tokio runtime: {e}")))?;

        // The manager drives the load; failures resurface on the next query.
        if let Acquired::Pending(pending) = self.sources.acquire(&self.default_source)? {
            debug!(identifier = %pending.identifier(), "preloading source");
        }
        Ok(())
    }

    /// Suggestions for `query` from the default source.
    ///
    /// `Ok(None)` signals that nothing matched.
    ///
    /// # Errors
    /// `InvalidQuery` for an empty query or zero cap; `Fetch`/`Parse` when
    /// the source fails to load.
    pub async fn get_suggestions(
        &self,
        query: &str,
        max_results: Option<usize>,
        exclude: &HashSet<String>,
    ) -> Result<Option<Vec<String>>> {
        self.suggestions_from(&self.default_source, query, max_results, exclude).await
    }

    /// Exact case-insensitive match for `query` in the default source.
    ///
    /// # Errors
    /// `InvalidQuery` for an empty query; `Fetch`/`Parse` when the source
    /// fails to load.
    pub async fn get_exact_match(&self, query: &str) -> Result<Option<String>> {
        self.exact_match_from(&self.default_source, query).await
    }

    /// Like [`get_suggestions`](Self::get_suggestions) for another source.
    ///
    /// Without an explicit cap, `source.default_max_results` applies.
    ///
    /// # Errors
    /// As [`get_suggestions`](Self::get_suggestions), plus `Config` for an
    /// invalid descriptor.
    pub async fn suggestions_from(
        &self,
        source: &SourceDescriptor,
        query: &str,
        max_results: Option<usize>,
        exclude: &HashSet<String>,
    ) -> Result<Option<Vec<String>>> {
        validate_query(query)?;
        source.validate()?;
        let max_results = max_results.unwrap_or(source.default_max_results);
        validate_max_results(max_results)?;

        let matcher = self.matcher(source).await?;
        matcher.get_matches(query, Some(max_results), exclude)
    }

    /// Like [`get_exact_match`](Self::get_exact_match) for another source.
    ///
    /// # Errors
    /// As [`get_exact_match`](Self::get_exact_match), plus `Config` for an
    /// invalid descriptor.
    pub async fn exact_match_from(
        &self,
        source: &SourceDescriptor,
        query: &str,
    ) -> Result<Option<String>> {
        validate_query(query)?;
        let matcher = self.matcher(source).await?;
        matcher.get_exact_match(query)
    }

    async fn matcher(&self, source: &SourceDescriptor) -> Result<Arc<Matcher>> {
        self.sources.acquire(source)?.into_matcher().await
    }
}
