//! Page fetcher abstraction for retrieving provider responses.

use async_trait::async_trait;

use crate::Result;

/// An outbound request descriptor produced by an engine.
///
/// Engines never perform I/O themselves; they describe the GET request
/// and leave the transport to a [`PageFetcher`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineRequest {
    /// Fully formed target URL, query string included.
    pub url: String,
    /// Cookies to attach, in insertion order.
    pub cookies: Vec<(String, String)>,
}

impl EngineRequest {
    /// Creates a request without cookies.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            cookies: Vec::new(),
        }
    }

    /// Adds a cookie.
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.push((name.into(), value.into()));
        self
    }

    /// Renders the cookies as a `Cookie` header value, if there are any.
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        let header = self
            .cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ");
        Some(header)
    }
}

/// A fetched provider response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineResponse {
    /// Final URL after redirects.
    pub url: String,
    /// Raw body text.
    pub body: String,
}

impl EngineResponse {
    /// Creates a response from its final URL and body.
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
        }
    }
}

/// Trait for performing the HTTP exchange described by an [`EngineRequest`].
///
/// Implementations own the session: user-agent, TLS, proxies and timeouts
/// are set at construction time. The host aggregator can plug in its own.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Performs the request and returns the final URL and body.
    async fn fetch(&self, request: &EngineRequest) -> Result<EngineResponse>;
}
