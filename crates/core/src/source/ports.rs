//! Port interfaces for dataset retrieval
//!
//! These traits define the boundary between the source manager and the
//! infrastructure that performs network or file I/O.

use async_trait::async_trait;
use suggest_domain::Result;

/// Retrieves the raw payload for a source identifier.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the payload behind `identifier`
    ///
    /// Implementations report failures as `SuggestError::Fetch`.
    async fn fetch(&self, identifier: &str) -> Result<String>;
}
