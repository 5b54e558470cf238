//! Yandex search engine (web and images).
//!
//! Three modes are supported:
//!
//! - [`YandexMode::Web`] scrapes the Yandex result page directly.
//! - [`YandexMode::WebProxy`] goes through the etools.ch front-end,
//!   configured by cookie to only query Yandex.
//! - [`YandexMode::Images`] reads the JSON state embedded in the image SERP.
//!
//! Direct and image responses are checked for a CAPTCHA redirect before
//! anything is parsed.

mod challenge;
mod images;
mod request;
mod web;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fetcher::{EngineRequest, EngineResponse, PageFetcher};
use crate::{
    Engine, EngineAbout, EngineCategory, EngineConfig, HttpFetcher, Result, SearchError,
    SearchQuery, SearchResult,
};

pub use challenge::{detect_challenge, CHALLENGE_PATH};
pub use images::{extract_images, locate_payload, parse_payload, unescape_html, PayloadSpan, PayloadTail};
pub use request::{build_request, PROXY_SETTINGS, PROXY_SETTINGS_COOKIE};
pub use web::{extract_web, WebMarkup};

/// Which Yandex surface to query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YandexMode {
    /// Web results straight from yandex.ru.
    #[default]
    Web,
    /// Web results through the etools.ch proxy.
    WebProxy,
    /// Image results.
    Images,
}

impl YandexMode {
    /// All modes, in display order.
    pub const ALL: [YandexMode; 3] = [Self::Web, Self::WebProxy, Self::Images];

    /// Returns the mode's identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::WebProxy => "web-proxy",
            Self::Images => "images",
        }
    }

    /// Returns the category results of this mode belong to.
    pub fn category(self) -> EngineCategory {
        match self {
            Self::Web | Self::WebProxy => EngineCategory::General,
            Self::Images => EngineCategory::Images,
        }
    }

    /// Whether responses must be checked for a CAPTCHA redirect.
    ///
    /// The proxy fronts the challenge itself, so its responses are exempt.
    pub fn checks_challenge(self) -> bool {
        !matches!(self, Self::WebProxy)
    }

    /// Returns the web markup this mode parses, if it is a web mode.
    pub fn web_markup(self) -> Option<WebMarkup> {
        match self {
            Self::Web => Some(WebMarkup::Direct),
            Self::WebProxy => Some(WebMarkup::Proxy),
            Self::Images => None,
        }
    }
}

impl fmt::Display for YandexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YandexMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| SearchError::Other(format!("Unknown Yandex mode '{}'", s)))
    }
}

/// Yandex search engine.
pub struct Yandex {
    config: EngineConfig,
    mode: YandexMode,
    fetcher: Arc<dyn PageFetcher>,
}

impl Yandex {
    /// Creates a new Yandex engine in the given mode with a default HTTP fetcher.
    pub fn new(mode: YandexMode) -> Self {
        Self::with_fetcher(mode, Arc::new(HttpFetcher::new()))
    }

    /// Creates a new Yandex engine with a custom page fetcher.
    pub fn with_fetcher(mode: YandexMode, fetcher: Arc<dyn PageFetcher>) -> Self {
        let (name, shortcut) = match mode {
            YandexMode::Images => ("Yandex Images", "ydi"),
            YandexMode::Web | YandexMode::WebProxy => ("Yandex", "yd"),
        };

        Self {
            config: EngineConfig {
                name: name.to_string(),
                shortcut: shortcut.to_string(),
                categories: vec![mode.category()],
                weight: 1.0,
                timeout: 5,
                enabled: true,
                paging: false,
                safesearch: true,
            },
            mode,
            fetcher,
        }
    }

    /// Creates with custom configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configured mode.
    pub fn mode(&self) -> YandexMode {
        self.mode
    }

    /// Returns metadata about the upstream provider.
    pub fn about() -> EngineAbout {
        EngineAbout {
            website: "https://yandex.ru/",
            wikidata_id: "Q5281",
            official_api_documentation: None,
            use_official_api: false,
            require_api_key: false,
            results: "HTML",
        }
    }

    /// Builds the outbound request for `query` without performing it.
    pub fn build_request(&self, query: &SearchQuery) -> Result<EngineRequest> {
        build_request(query, self.mode)
    }

    /// Turns a fetched response into results.
    ///
    /// The challenge check runs first and short-circuits all parsing.
    pub fn parse_response(&self, response: &EngineResponse) -> Result<Vec<SearchResult>> {
        if self.mode.checks_challenge() {
            detect_challenge(response)?;
        }

        match self.mode.web_markup() {
            Some(markup) => extract_web(&response.body, markup),
            None => extract_images(&response.body),
        }
    }
}

impl Default for Yandex {
    fn default() -> Self {
        Self::new(YandexMode::default())
    }
}

#[async_trait]
impl Engine for Yandex {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        let request = self.build_request(query)?;
        debug!("Yandex {} request: {}", self.mode, request.url);

        let response = self.fetcher.fetch(&request).await?;
        let results = self.parse_response(&response)?;

        debug!("Yandex {} returned {} results", self.mode, results.len());
        Ok(results)
    }
}
