//! Image result extraction from the embedded bootstrap state.
//!
//! The image SERP ships its client state as an HTML-escaped JSON blob.
//! There is no standalone object to parse, so the blob is cut out of the
//! re-serialized page between a fixed opening literal and one of two
//! closing literals. Which closing literal appears depends on the A/B
//! bucket Yandex put the request in.

use scraper::Html;
use serde_json::Value;
use tracing::trace;

use crate::humanize::humanize_bytes;
use crate::{ImageResult, Result, SearchError, SearchResult};

const PAYLOAD_OPEN: &str = r#"{"location":"/images/search/"#;
const PRIMARY_CLOSE: &str = r#"advRsyaSearchColumn":null}}"#;
const SECONDARY_CLOSE: &str = "false}}}";

const ENTITIES_POINTER: &str = "/initialState/serpList/items/entities";

/// Which closing literal terminated the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadTail {
    /// `advRsyaSearchColumn":null}}`
    Primary,
    /// `false}}}`
    Secondary,
}

/// A reassembled payload candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadSpan {
    /// Opening literal, fragment and closing literal joined back together.
    pub json: String,
    /// Closing literal that matched.
    pub tail: PayloadTail,
}

/// Extracts image results from an image SERP.
pub fn extract_images(html: &str) -> Result<Vec<SearchResult>> {
    let document = Html::parse_document(html);
    let text = unescape_html(&document.html());
    let span = locate_payload(&text)?;
    trace!("Located image payload ({:?} tail, {} bytes)", span.tail, span.json.len());
    parse_payload(&span.json)
}

/// Cuts the payload out of unescaped page text.
///
/// The primary closing literal is tried first; the secondary one only when
/// the primary pair is absent.
pub fn locate_payload(text: &str) -> Result<PayloadSpan> {
    let candidates = [
        (PRIMARY_CLOSE, PayloadTail::Primary),
        (SECONDARY_CLOSE, PayloadTail::Secondary),
    ];

    for (close, tail) in candidates {
        if let Some(fragment) = between(text, PAYLOAD_OPEN, close) {
            return Ok(PayloadSpan {
                json: format!("{}{}{}", PAYLOAD_OPEN, fragment, close),
                tail,
            });
        }
    }

    Err(SearchError::MalformedPayload(
        "image state delimiters not found".to_string(),
    ))
}

fn between<'a>(text: &'a str, begin: &str, end: &str) -> Option<&'a str> {
    let start = text.find(begin)? + begin.len();
    let len = text[start..].find(end)?;
    Some(&text[start..start + len])
}

/// Parses a reassembled payload into image results, keeping entity order.
///
/// Only the first complete JSON value is read. Closing braces that the
/// delimiter dragged in past the end of the object are tolerated; any
/// other trailing text is a malformed payload.
pub fn parse_payload(json: &str) -> Result<Vec<SearchResult>> {
    let mut stream = serde_json::Deserializer::from_str(json).into_iter::<Value>();
    let state = stream
        .next()
        .ok_or_else(|| SearchError::MalformedPayload("empty payload".to_string()))?
        .map_err(|e| SearchError::MalformedPayload(e.to_string()))?;

    let trailing = &json[stream.byte_offset()..];
    if !trailing.chars().all(|c| c == '}' || c.is_whitespace()) {
        return Err(SearchError::MalformedPayload(format!(
            "unexpected data after payload: {:?}",
            trailing.trim()
        )));
    }

    let entities = state
        .pointer(ENTITIES_POINTER)
        .and_then(Value::as_object)
        .ok_or_else(|| {
            SearchError::MalformedPayload(
                "missing initialState.serpList.items.entities".to_string(),
            )
        })?;

    let results = entities
        .values()
        .filter_map(image_from_entity)
        .map(SearchResult::from)
        .collect();

    Ok(results)
}

fn image_from_entity(entity: &Value) -> Option<ImageResult> {
    let source = str_at(entity, "/snippet/url").filter(|url| !url.is_empty())?;
    let title = str_at(entity, "/snippet/title").unwrap_or_default();

    // The first duplicate descriptor is the canonical full-size image.
    let dup = entity.pointer("/viewerData/dups/0");
    let field = |name: &str| dup.and_then(|d| d.get(name));

    let img_src = field("url").and_then(Value::as_str).unwrap_or_default();
    let width = field("w").and_then(as_u64).unwrap_or(0);
    let height = field("h").and_then(as_u64).unwrap_or(0);
    let filesize = field("fileSizeInBytes")
        .and_then(as_u64)
        .map(humanize_bytes)
        .unwrap_or_default();

    Some(
        ImageResult::new(source, title)
            .with_img_src(img_src)
            .with_thumbnail(str_at(entity, "/image").unwrap_or_default())
            .with_filesize(filesize)
            .with_dimensions(width, height),
    )
}

fn str_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

fn as_u64(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
}

/// Reverses HTML entity escaping in serialized markup.
///
/// Decodes every HTML5 named entity as well as numeric references.
pub fn unescape_html(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}
