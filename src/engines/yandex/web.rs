//! Web result extraction for the direct and proxy markups.

use scraper::{ElementRef, Html, Selector};
use tracing::trace;
use url::Url;

use crate::{Result, SearchError, SearchResult, WebResult};

/// Which HTML layout a web page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebMarkup {
    /// Yandex's own result page.
    Direct,
    /// The etools.ch proxy front-end.
    Proxy,
}

enum LinkScope {
    /// First match of a node-relative selector.
    Descendant(Selector),
    /// First `<a href>` that is a direct child of the row.
    DirectChild,
}

struct ResultSelectors {
    row: Selector,
    link: LinkScope,
    // None: take the text of the direct-child anchors.
    title: Option<Selector>,
    content: Selector,
    affiliate: Option<Selector>,
}

impl ResultSelectors {
    fn direct() -> Result<Self> {
        Ok(Self {
            row: parse_selector("li.serp-item")?,
            link: LinkScope::Descendant(parse_selector(r#"a[class="OrganicTitle-Link"][href]"#)?),
            title: Some(parse_selector(
                r#"h2[class="OrganicTitle-LinkText"] > a[class="OrganicTitle-Link"] > span"#,
            )?),
            content: parse_selector(r#"div[class="Organic-ContentWrapper"] div[class="OrganicText"]"#)?,
            affiliate: None,
        })
    }

    fn proxy() -> Result<Self> {
        Ok(Self {
            row: parse_selector("table.result td.record")?,
            link: LinkScope::DirectChild,
            title: None,
            content: parse_selector(r#"div[class="text"]"#)?,
            affiliate: Some(parse_selector(r#"span[class="affiliate"]"#)?),
        })
    }

    fn for_markup(markup: WebMarkup) -> Result<Self> {
        match markup {
            WebMarkup::Direct => Self::direct(),
            WebMarkup::Proxy => Self::proxy(),
        }
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))
}

/// Extracts web results from a result page, in document order.
///
/// Rows without a usable absolute link, and proxy rows carrying an
/// affiliate marker, are dropped. Missing titles or snippets leave the
/// field empty.
pub fn extract_web(html: &str, markup: WebMarkup) -> Result<Vec<SearchResult>> {
    let document = Html::parse_document(html);
    let selectors = ResultSelectors::for_markup(markup)?;

    let mut results = Vec::new();

    for row in document.select(&selectors.row) {
        if let Some(affiliate) = &selectors.affiliate {
            if row.select(affiliate).next().is_some() {
                continue;
            }
        }

        let url = match find_link(row, &selectors.link) {
            Some(url) => url,
            None => continue,
        };

        let title = match &selectors.title {
            Some(selector) => flatten_text(row.select(selector)),
            None => flatten_text(child_anchors(row)),
        };
        let content = flatten_text(row.select(&selectors.content));

        results.push(WebResult::new(url, title, content).into());
    }

    trace!("Extracted {} web results ({:?} markup)", results.len(), markup);
    Ok(results)
}

fn find_link(row: ElementRef<'_>, scope: &LinkScope) -> Option<String> {
    let href = match scope {
        LinkScope::Descendant(selector) => row.select(selector).next()?.value().attr("href")?,
        LinkScope::DirectChild => child_anchors(row).find_map(|a| a.value().attr("href"))?,
    };
    let href = href.trim();

    match Url::parse(href) {
        Ok(parsed) if parsed.has_host() => Some(href.to_string()),
        _ => None,
    }
}

fn child_anchors<'a>(row: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "a")
}

/// Joins all descendant text of the matched nodes, collapsing whitespace.
fn flatten_text<'a>(nodes: impl Iterator<Item = ElementRef<'a>>) -> String {
    let text: String = nodes.flat_map(|node| node.text()).collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
