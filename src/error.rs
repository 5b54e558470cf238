//! Error types for the search library.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The provider answered with a bot challenge instead of results.
    #[error("CAPTCHA challenge returned at {0}")]
    Captcha(String),

    /// The embedded JSON payload could not be located or decoded.
    #[error("Malformed embedded payload: {0}")]
    MalformedPayload(String),

    /// Search timeout exceeded.
    #[error("Search timeout exceeded")]
    Timeout,

    /// Invalid query.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}

impl SearchError {
    /// Returns true if this error is a provider bot challenge.
    pub fn is_captcha(&self) -> bool {
        matches!(self, Self::Captcha(_))
    }
}
