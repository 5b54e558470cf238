//! Bot-challenge detection.

use tracing::debug;
use url::Url;

use crate::fetcher::EngineResponse;
use crate::{Result, SearchError};

/// Path prefix Yandex redirects to when it wants a CAPTCHA solved.
pub const CHALLENGE_PATH: &str = "/showcaptcha";

/// Fails with [`SearchError::Captcha`] if the response landed on the
/// challenge page.
///
/// Only the resolved path is inspected; the body is never looked at.
pub fn detect_challenge(response: &EngineResponse) -> Result<()> {
    if resolved_path(&response.url).starts_with(CHALLENGE_PATH) {
        debug!("Yandex challenge page at {}", response.url);
        return Err(SearchError::Captcha(response.url.clone()));
    }
    Ok(())
}

// Hosts may hand over a bare path instead of an absolute URL.
fn resolved_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    }
}
