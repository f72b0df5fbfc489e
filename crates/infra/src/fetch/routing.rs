use async_trait::async_trait;
use suggest_core::Fetcher;
use suggest_domain::{FetchConfig, Result};
use tracing::debug;

use super::{FileFetcher, HttpFetcher};

/// Sends `http://` and `https://` identifiers to [`HttpFetcher`] and
/// everything else to [`FileFetcher`].
#[derive(Debug, Clone)]
pub struct RoutingFetcher {
    http: HttpFetcher,
    file: FileFetcher,
}

impl RoutingFetcher {
    /// Route URLs to `http` and everything else to `file`.
    pub fn new(http: HttpFetcher, file: FileFetcher) -> Self {
        Self { http, file }
    }

    /// # Errors
    /// Returns `SuggestError::Config` if the HTTP client cannot be built.
    pub fn from_config(config: &FetchConfig) -> Result<Self> {
        let file = config.root_dir.clone().map_or_else(FileFetcher::new, FileFetcher::with_root);
        Ok(Self::new(HttpFetcher::from_config(config)?, file))
    }

    /// Whether `identifier` has an `http` or `https` scheme.
    pub fn is_remote(identifier: &str) -> bool {
        let scheme = identifier.split_once("://").map(|(scheme, _)| scheme);
        matches!(scheme, Some(s) if s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https"))
    }
}

#[async_trait]
impl Fetcher for RoutingFetcher {
    async fn fetch(&self, identifier: &str) -> Result<String> {
        if Self::is_remote(identifier) {
            debug!(identifier, route = "http", "routing fetch");
            self.http.fetch(identifier).await
        } else {
            debug!(identifier, route = "file", "routing fetch");
            self.file.fetch(identifier).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_by_scheme() {
        assert!(RoutingFetcher::is_remote("https://example.com/tz.json"));
        assert!(RoutingFetcher::is_remote("HTTP://example.com/tz.json"));
        assert!(!RoutingFetcher::is_remote("dataset/tz.json"));
        assert!(!RoutingFetcher::is_remote("file:///tmp/tz.json"));
        assert!(!RoutingFetcher::is_remote("/srv/http://odd"));
    }
}
