//! Yandex search CLI - query Yandex web or image search from the command line.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use yandex_search::{
    engines::{Yandex, YandexMode},
    Engine, EngineConfig, SafeSearch, SearchQuery, SearchResult,
};

/// Yandex search - web and image results from the command line
#[derive(Parser)]
#[command(name = "yandex-search")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a search
    Search(SearchArgs),

    /// List available modes
    Modes,
}

#[derive(Parser)]
struct SearchArgs {
    /// Search query
    query: String,

    /// Which Yandex surface to query
    #[arg(short, long, default_value = "web")]
    mode: ModeArg,

    /// Page number (1-indexed)
    #[arg(long, default_value = "1")]
    page: u32,

    /// Result language (web mode only)
    #[arg(long)]
    lang: Option<String>,

    /// Ask for safe search
    #[arg(long)]
    safesearch: bool,

    /// Maximum number of results to display
    #[arg(short, long, default_value = "10")]
    limit: usize,

    /// Search timeout in seconds (defaults to the engine's configured timeout)
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Web results from yandex.ru
    Web,
    /// Web results through the etools.ch proxy
    WebProxy,
    /// Image results
    Images,
}

impl From<ModeArg> for YandexMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Web => YandexMode::Web,
            ModeArg::WebProxy => YandexMode::WebProxy,
            ModeArg::Images => YandexMode::Images,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Compact single-line output
    Compact,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    match cli.command {
        Commands::Search(args) => run_search(args).await,
        Commands::Modes => list_modes(),
    }
}

fn list_modes() -> Result<()> {
    println!("Available modes:\n");
    println!("    web        - Yandex web search (yandex.ru)");
    println!("    web-proxy  - Yandex web search through etools.ch");
    println!("    images     - Yandex image search");
    println!();
    println!("Usage: yandex-search search \"query\" -m images");
    Ok(())
}

async fn run_search(args: SearchArgs) -> Result<()> {
    let engine = Yandex::new(args.mode.into());

    let mut query = SearchQuery::new(&args.query).with_page(args.page);
    if let Some(lang) = &args.lang {
        query = query.with_language(lang);
    }
    if args.safesearch {
        query = query.with_safesearch(SafeSearch::Moderate);
    }

    let limit = search_timeout(args.timeout, engine.config());
    let results = tokio::time::timeout(limit, engine.search(&query))
        .await
        .map_err(|_| yandex_search::SearchError::Timeout)??;

    match args.format {
        OutputFormat::Text => {
            println!(
                "\n{} results for \"{}\" ({} mode):\n",
                results.len(),
                args.query,
                engine.mode()
            );

            for (i, result) in results.iter().take(args.limit).enumerate() {
                println!("{}. {}", i + 1, result.title());
                println!("   URL: {}", result.url());
                match result {
                    SearchResult::Web(web) => {
                        if !web.content.is_empty() {
                            println!("   {}", truncate(&web.content, 150));
                        }
                    }
                    SearchResult::Image(image) => {
                        println!("   Image: {}", image.img_src);
                        println!("   {} | {}", image.resolution, image.filesize);
                    }
                }
                println!();
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = results.iter().take(args.limit).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Compact => {
            for result in results.iter().take(args.limit) {
                println!("{}\t{}", result.title(), result.url());
            }
        }
    }

    Ok(())
}

fn search_timeout(requested: Option<u64>, config: &EngineConfig) -> Duration {
    Duration::from_secs(requested.unwrap_or(config.timeout))
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_timeout_falls_back_to_engine_config() {
        let engine = Yandex::new(YandexMode::Web);
        assert_eq!(search_timeout(None, engine.config()), Duration::from_secs(5));
        assert_eq!(search_timeout(Some(12), engine.config()), Duration::from_secs(12));
    }

    #[test]
    fn test_search_timeout_honors_custom_config() {
        let config = EngineConfig {
            timeout: 30,
            ..Default::default()
        };
        assert_eq!(search_timeout(None, &config), Duration::from_secs(30));
    }
}
