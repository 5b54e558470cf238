//! Outbound request construction, one builder per mode.

use url::Url;

use super::YandexMode;
use crate::fetcher::EngineRequest;
use crate::{Result, SearchError, SearchQuery};

pub(crate) const BASE_URL_WEB: &str = "https://yandex.ru/yandsearch";
pub(crate) const BASE_URL_IMAGES: &str = "https://yandex.ru/images/search";
pub(crate) const PROXY_URL_WEB: &str = "https://www.etools.ch";

const DEFAULT_LANGUAGE: &str = "en";
const IMAGES_VIEWPORT_HINT: &str = "sw-1920-sh-1080-ww-1125-wh-999";
const PROXY_PAGE_RESULTS: u32 = 20;

/// Name of the settings cookie understood by the proxy front-end.
pub const PROXY_SETTINGS_COOKIE: &str = "searchSettings";

/// Proxy preferences: only Yandex enabled, every peer engine ranked 0.
///
/// Carries `safeSearch_false` regardless of the caller's preference; the
/// computed flag only reaches the query string.
pub const PROXY_SETTINGS: &str = "VER_3.3-autocomplete_true-country_web-customerId_-dataSourceResults_20-dataSources_mySettings-excludeQuery_-language_all-markKeyword_false-openNewWindow_true-pageResults_20-queryAutoFocus_true-rankCalibration_%28Base_0%29%28Bing_0%29%28Brave_0%29%28DuckDuckGo_0%29%28Google_0%29%28Lilo_0%29%28Mojeek_0%29%28Qwant_0%29%28Search_0%29%28Tiger_0%29%28Wikipedia_0%29%28Yahoo_0%29%28Yandex_4%29-redirectLinks_false-safeSearch_false-showAdvertisement_true-showSearchStatus_true-timeout_4000-usePost_false";

/// Builds the outbound request for `query` in the given mode.
pub fn build_request(query: &SearchQuery, mode: YandexMode) -> Result<EngineRequest> {
    if query.query.trim().is_empty() {
        return Err(SearchError::InvalidQuery("Query cannot be empty".into()));
    }

    match mode {
        YandexMode::Web => web_request(query),
        YandexMode::WebProxy => Ok(proxy_request(query)),
        YandexMode::Images => images_request(query),
    }
}

fn web_request(query: &SearchQuery) -> Result<EngineRequest> {
    let language = query.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
    let mut params = vec![
        ("text", query.query.clone()),
        ("lang", language.to_string()),
    ];
    if query.page > 1 {
        params.push(("p", query.page_offset().to_string()));
    }

    let url = Url::parse_with_params(BASE_URL_WEB, &params)?;
    Ok(EngineRequest::new(url))
}

fn proxy_request(query: &SearchQuery) -> EngineRequest {
    let safesearch = if query.safesearch.is_enabled() {
        "true"
    } else {
        "false"
    };

    let url = format!(
        "{}/searchAdvancedSubmit.do?query={}&pageResults={}&safeSearch={}&dataSources=mySettings",
        PROXY_URL_WEB,
        urlencoding::encode(&query.query),
        PROXY_PAGE_RESULTS,
        safesearch
    );

    EngineRequest::new(url).with_cookie(PROXY_SETTINGS_COOKIE, PROXY_SETTINGS)
}

fn images_request(query: &SearchQuery) -> Result<EngineRequest> {
    let url = Url::parse_with_params(
        BASE_URL_IMAGES,
        &[("text", query.query.as_str()), ("uinfo", IMAGES_VIEWPORT_HINT)],
    )?;
    Ok(EngineRequest::new(url))
}
