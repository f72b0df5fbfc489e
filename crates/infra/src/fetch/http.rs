use async_trait::async_trait;
use reqwest::{Method, Url};
use suggest_core::Fetcher;
use suggest_domain::{FetchConfig, Result, SuggestError};
use tracing::debug;

use crate::errors::InfraError;
use crate::http::HttpClient;

/// Fetches payloads over HTTP(S) with the retrying [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: HttpClient,
}

impl HttpFetcher {
    /// Wrap an existing client.
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// # Errors
    /// Returns `SuggestError::Config` if the HTTP client cannot be built.
    pub fn from_config(config: &FetchConfig) -> Result<Self> {
        HttpClient::from_config(config).map(Self::new)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, identifier: &str) -> Result<String> {
        let url = Url::parse(identifier)
            .map_err(|err| SuggestError::fetch(identifier, format!("invalid URL: {err}")))?;

        let response = self.client.send(self.client.request(Method::GET, url)).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::fetch(
                identifier,
                format!(
                    "HTTP {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("unknown status")
                ),
            ));
        }

        let body = response.bytes().await.map_err(InfraError::from)?;
        debug!(identifier, bytes = body.len(), "fetched payload over HTTP");
        String::from_utf8(body.to_vec()).map_err(|err| InfraError::utf8(identifier, &err).into())
    }
}
