//! Search result types.

use serde::{Deserialize, Serialize};

/// Rendering template the host uses for image results.
pub const IMAGE_TEMPLATE: &str = "images.html";

/// Type of search result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    /// Standard web result.
    #[default]
    Web,
    /// Image result.
    Image,
}

/// A web result: link, title and snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebResult {
    /// Result URL.
    pub url: String,
    /// Result title.
    pub title: String,
    /// Result description/snippet.
    pub content: String,
}

impl WebResult {
    /// Creates a new web result.
    pub fn new(url: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// An image result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    /// Image title.
    pub title: String,
    /// Page the image was found on.
    pub url: String,
    /// Full-size image URL.
    pub img_src: String,
    /// Human-readable file size.
    pub filesize: String,
    /// Thumbnail URL.
    pub thumbnail_src: String,
    /// Rendering template hint.
    pub template: String,
    /// `"<width> x <height>"`.
    pub resolution: String,
}

impl ImageResult {
    /// Creates a new image result for the given source page.
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            img_src: String::new(),
            filesize: String::new(),
            thumbnail_src: String::new(),
            template: IMAGE_TEMPLATE.to_string(),
            resolution: "0 x 0".to_string(),
        }
    }

    /// Sets the full-size image URL.
    pub fn with_img_src(mut self, img_src: impl Into<String>) -> Self {
        self.img_src = img_src.into();
        self
    }

    /// Sets the thumbnail URL.
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail_src = thumbnail.into();
        self
    }

    /// Sets the human-readable file size.
    pub fn with_filesize(mut self, filesize: impl Into<String>) -> Self {
        self.filesize = filesize.into();
        self
    }

    /// Sets the resolution from pixel dimensions.
    pub fn with_dimensions(mut self, width: u64, height: u64) -> Self {
        self.resolution = format!("{} x {}", width, height);
        self
    }
}

/// A single search result.
///
/// Serializes without a tag, so web results carry exactly
/// `url`, `title`, `content` and image results carry the image keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResult {
    /// Image result. Listed first so untagged deserialization prefers it.
    Image(ImageResult),
    /// Web result.
    Web(WebResult),
}

impl SearchResult {
    /// Returns the result URL (the source page for images).
    pub fn url(&self) -> &str {
        match self {
            Self::Web(r) => &r.url,
            Self::Image(r) => &r.url,
        }
    }

    /// Returns the result title.
    pub fn title(&self) -> &str {
        match self {
            Self::Web(r) => &r.title,
            Self::Image(r) => &r.title,
        }
    }

    /// Returns the type of result.
    pub fn result_type(&self) -> ResultType {
        match self {
            Self::Web(_) => ResultType::Web,
            Self::Image(_) => ResultType::Image,
        }
    }
}

impl From<WebResult> for SearchResult {
    fn from(result: WebResult) -> Self {
        Self::Web(result)
    }
}

impl From<ImageResult> for SearchResult {
    fn from(result: ImageResult) -> Self {
        Self::Image(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_type_default() {
        let default: ResultType = Default::default();
        assert_eq!(default, ResultType::Web);
    }

    #[test]
    fn test_web_result_new() {
        let result = WebResult::new("https://example.com", "Title", "Content");
        assert_eq!(result.url, "https://example.com");
        assert_eq!(result.title, "Title");
        assert_eq!(result.content, "Content");
    }

    #[test]
    fn test_image_result_builder() {
        let result = ImageResult::new("https://src", "T")
            .with_img_src("https://full")
            .with_thumbnail("https://thumb")
            .with_filesize("1.00 KB")
            .with_dimensions(200, 100);
        assert_eq!(result.img_src, "https://full");
        assert_eq!(result.thumbnail_src, "https://thumb");
        assert_eq!(result.filesize, "1.00 KB");
        assert_eq!(result.resolution, "200 x 100");
        assert_eq!(result.template, IMAGE_TEMPLATE);
    }

    #[test]
    fn test_search_result_accessors() {
        let web: SearchResult = WebResult::new("https://a", "A", "").into();
        let image: SearchResult = ImageResult::new("https://b", "B").into();
        assert_eq!(web.url(), "https://a");
        assert_eq!(web.title(), "A");
        assert_eq!(web.result_type(), ResultType::Web);
        assert_eq!(image.url(), "https://b");
        assert_eq!(image.title(), "B");
        assert_eq!(image.result_type(), ResultType::Image);
    }

    #[test]
    fn test_web_result_serialization_keys() {
        let result: SearchResult = WebResult::new("https://example.com", "Example", "A sample site").into();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "url": "https://example.com",
                "title": "Example",
                "content": "A sample site"
            })
        );
    }

    #[test]
    fn test_image_result_serialization_keys() {
        let result: SearchResult = ImageResult::new("https://src", "T")
            .with_dimensions(200, 100)
            .into();
        let value = serde_json::to_value(&result).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "filesize",
                "img_src",
                "resolution",
                "template",
                "thumbnail_src",
                "title",
                "url"
            ]
        );
        assert_eq!(value["template"], "images.html");
    }

    #[test]
    fn test_image_result_json_round_trip_is_lossless() {
        let original: SearchResult = ImageResult::new("https://src", "T")
            .with_img_src("https://full")
            .with_thumbnail("https://thumb")
            .with_filesize("1.00 KB")
            .with_dimensions(200, 100)
            .into();
        let json = serde_json::to_string(&original).unwrap();
        let restored: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_untagged_deserialization() {
        let web: SearchResult =
            serde_json::from_str(r#"{"url":"https://a","title":"A","content":"c"}"#).unwrap();
        assert_eq!(web.result_type(), ResultType::Web);

        let image: SearchResult = serde_json::from_str(
            r#"{"title":"T","url":"https://s","img_src":"https://f","filesize":"1.00 KB",
                "thumbnail_src":"https://t","template":"images.html","resolution":"2 x 1"}"#,
        )
        .unwrap();
        assert_eq!(image.result_type(), ResultType::Image);
    }
}
