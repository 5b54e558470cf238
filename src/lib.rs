//! # yandex-search
//!
//! A Yandex search engine for embeddable meta search, covering web results
//! (directly or through the etools.ch proxy) and image results.
//!
//! The engine separates request construction, transport and extraction:
//! a [`PageFetcher`] performs the HTTP exchange, so a host aggregator can
//! reuse its own session layer while this crate only builds requests and
//! parses responses.
//!
//! ## Example
//!
//! ```rust,no_run
//! use yandex_search::{engines::{Yandex, YandexMode}, Engine, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = Yandex::new(YandexMode::Images);
//!     let results = engine.search(&SearchQuery::new("aurora borealis")).await?;
//!
//!     for result in &results {
//!         println!("{}: {}", result.title(), result.url());
//!     }
//!     Ok(())
//! }
//! ```

mod engine;
mod error;
mod fetcher;
mod fetcher_http;
mod humanize;
mod query;
mod result;

pub mod engines;

pub use engine::{Engine, EngineAbout, EngineCategory, EngineConfig};
pub use error::{Result, SearchError};
pub use fetcher::{EngineRequest, EngineResponse, PageFetcher};
pub use fetcher_http::HttpFetcher;
pub use humanize::humanize_bytes;
pub use query::{SafeSearch, SearchQuery};
pub use result::{ImageResult, ResultType, SearchResult, WebResult, IMAGE_TEMPLATE};
