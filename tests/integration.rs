//! Integration tests for the Yandex engine.
//!
//! The offline tests drive the engine end to end through a canned
//! `PageFetcher`. The live tests are marked with `#[ignore]` because they
//! require network access and Yandex regularly answers automated clients
//! with a CAPTCHA.
//!
//! Run the live tests with: `cargo test --test integration -- --ignored`

use std::sync::Arc;

use async_trait::async_trait;
use yandex_search::engines::{Yandex, YandexMode};
use yandex_search::{
    Engine, EngineRequest, EngineResponse, PageFetcher, SearchError, SearchQuery, SearchResult,
};

struct CannedFetcher {
    url: String,
    body: String,
}

#[async_trait]
impl PageFetcher for CannedFetcher {
    async fn fetch(&self, _request: &EngineRequest) -> yandex_search::Result<EngineResponse> {
        Ok(EngineResponse::new(self.url.clone(), self.body.clone()))
    }
}

fn engine(mode: YandexMode, url: &str, body: &str) -> Yandex {
    let fetcher = Arc::new(CannedFetcher {
        url: url.to_string(),
        body: body.to_string(),
    });
    Yandex::with_fetcher(mode, fetcher)
}

fn direct_page(rows: usize, ads: usize) -> String {
    let mut html = String::from("<html><body><ul>");
    for i in 0..rows {
        html.push_str(&format!(
            r#"<li class="serp-item"><h2 class="OrganicTitle-LinkText"><a class="OrganicTitle-Link" href="https://site{i}.example/"><span>Site {i}</span></a></h2><div class="Organic-ContentWrapper"><div class="OrganicText">Snippet {i}</div></div></li>"#,
        ));
        if i < ads {
            html.push_str(r#"<li class="serp-item"><div class="AdvLabel">Реклама</div></li>"#);
        }
    }
    html.push_str("</ul></body></html>");
    html
}

fn proxy_page(rows: usize, ads: usize) -> String {
    let mut html = String::from(r#"<html><body><table class="result">"#);
    for i in 0..ads {
        html.push_str(&format!(
            r#"<tr><td class="record"><a href="https://ad{i}.example/">Ad {i}</a><span class="affiliate">Ad</span></td></tr>"#,
        ));
    }
    for i in 0..rows {
        html.push_str(&format!(
            r#"<tr><td class="record"><a href="https://site{i}.example/">Site {i}</a><div class="text">Snippet {i}</div></td></tr>"#,
        ));
    }
    html.push_str("</table></body></html>");
    html
}

mod offline_tests {
    use super::*;

    #[tokio::test]
    async fn test_direct_counts_only_real_rows() {
        let engine = engine(YandexMode::Web, "https://yandex.ru/yandsearch?text=x", &direct_page(5, 3));
        let results = engine.search(&SearchQuery::new("x")).await.unwrap();
        assert_eq!(results.len(), 5);
        let urls: Vec<_> = results.iter().map(|r| r.url().to_string()).collect();
        let expected: Vec<_> = (0..5).map(|i| format!("https://site{}.example/", i)).collect();
        assert_eq!(urls, expected);
    }

    #[tokio::test]
    async fn test_proxy_counts_only_real_rows() {
        let engine = engine(
            YandexMode::WebProxy,
            "https://www.etools.ch/searchAdvancedSubmit.do",
            &proxy_page(4, 2),
        );
        let results = engine.search(&SearchQuery::new("x")).await.unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].title(), "Site 0");
        assert_eq!(results[3].url(), "https://site3.example/");
    }

    #[tokio::test]
    async fn test_images_end_to_end() {
        let payload = r#"{"location":"/images/search/","initialState":{"serpList":{"items":{"entities":{"0":{"snippet":{"title":"T","url":"https://src"},"image":"https://thumb","viewerData":{"dups":[{"url":"https://full","h":100,"w":200,"fileSizeInBytes":1024}]}}}}}},"advRsyaSearchColumn":null}}"#;
        let body = format!(
            r#"<html><body><div class="Root" data-state="{}"></div></body></html>"#,
            payload.replace('"', "&quot;")
        );
        let engine = engine(YandexMode::Images, "https://yandex.ru/images/search?text=t", &body);
        let results = engine.search(&SearchQuery::new("t")).await.unwrap();
        assert_eq!(results.len(), 1);

        match &results[0] {
            SearchResult::Image(image) => {
                assert_eq!(image.title, "T");
                assert_eq!(image.url, "https://src");
                assert_eq!(image.img_src, "https://full");
                assert_eq!(image.thumbnail_src, "https://thumb");
                assert_eq!(image.resolution, "200 x 100");
                assert_eq!(image.filesize, yandex_search::humanize_bytes(1024));
            }
            other => panic!("Expected image result, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_challenge_propagates_for_direct_modes() {
        for mode in [YandexMode::Web, YandexMode::Images] {
            let engine = engine(mode, "https://yandex.ru/showcaptcha?retpath=x", &direct_page(2, 0));
            let err = engine.search(&SearchQuery::new("x")).await.unwrap_err();
            assert!(matches!(err, SearchError::Captcha(_)));
        }
    }

    #[test]
    fn test_blocking_search_via_tokio_test() {
        let engine = engine(YandexMode::Web, "https://yandex.ru/yandsearch", &direct_page(1, 0));
        let results = tokio_test::block_on(engine.search(&SearchQuery::new("x"))).unwrap();
        assert_eq!(results.len(), 1);
    }
}

mod live_tests {
    use super::*;

    async fn run(mode: YandexMode, query: &str) -> Vec<SearchResult> {
        let engine = Yandex::new(mode);
        match engine.search(&SearchQuery::new(query)).await {
            Ok(results) => {
                println!("Yandex {} returned {} results for '{}'", mode, results.len(), query);
                for (i, result) in results.iter().take(3).enumerate() {
                    println!("  {}. {} - {}", i + 1, result.title(), result.url());
                }
                results
            }
            Err(e) => {
                println!("Yandex {} failed: {}", mode, e);
                vec![]
            }
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_yandex_web_search() {
        let results = run(YandexMode::Web, "rust programming").await;
        println!("Direct web returned {} results", results.len());
    }

    #[tokio::test]
    #[ignore]
    async fn test_yandex_proxy_search() {
        let results = run(YandexMode::WebProxy, "rust programming").await;
        println!("Proxy web returned {} results", results.len());
    }

    #[tokio::test]
    #[ignore]
    async fn test_yandex_images_search() {
        let results = run(YandexMode::Images, "ferris crab").await;
        println!("Images returned {} results", results.len());
    }
}
