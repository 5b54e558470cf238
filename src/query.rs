//! Search query representation.

use serde::{Deserialize, Serialize};

/// Safe search level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SafeSearch {
    /// No filtering.
    #[default]
    Off = 0,
    /// Moderate filtering.
    Moderate = 1,
    /// Strict filtering.
    Strict = 2,
}

impl SafeSearch {
    /// Returns the on/off flag sent to providers that only know a boolean.
    pub fn is_enabled(self) -> bool {
        self != Self::Off
    }
}

/// A search query with all parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The search terms.
    pub query: String,
    /// Language/locale (e.g., "en", "ru").
    pub language: Option<String>,
    /// Safe search level.
    pub safesearch: SafeSearch,
    /// Page number (1-indexed).
    pub page: u32,
}

impl SearchQuery {
    /// Creates a new search query with the given terms.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: None,
            safesearch: SafeSearch::Off,
            page: 1,
        }
    }

    /// Sets the language/locale.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the safe search level.
    pub fn with_safesearch(mut self, level: SafeSearch) -> Self {
        self.safesearch = level;
        self
    }

    /// Sets the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Zero-based page offset; page `0` is treated as the first page.
    pub fn page_offset(&self) -> u32 {
        self.page.saturating_sub(1)
    }
}
