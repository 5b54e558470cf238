//! HTTP-based page fetcher using reqwest.

use async_trait::async_trait;
use reqwest::header::COOKIE;
use reqwest::Client;
use tracing::debug;

use crate::fetcher::{EngineRequest, EngineResponse, PageFetcher};
use crate::Result;

/// A page fetcher that uses plain HTTP requests via reqwest.
///
/// Redirects are followed and the final URL is reported back, which is
/// what challenge detection inspects.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a new `HttpFetcher` with default settings.
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent("Mozilla/5.0 (compatible; yandex-search/0.1)")
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Creates an `HttpFetcher` with a custom reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, request: &EngineRequest) -> Result<EngineResponse> {
        let mut builder = self.client.get(&request.url);
        if let Some(cookies) = request.cookie_header() {
            builder = builder.header(COOKIE, cookies);
        }

        let response = builder.send().await?;
        let url = response.url().to_string();
        debug!("Fetched {} (status {})", url, response.status());

        let body = response.text().await?;
        Ok(EngineResponse { url, body })
    }
}
