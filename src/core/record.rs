use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

/// One item of the fetched photo list.
///
/// Wire names are camelCase (`thumbnailUrl`). Fields the gallery does not use
/// (`albumId`, `id`) are skipped during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    pub thumbnail_url: String,
    pub title: String,
    // Never rendered; kept so the record mirrors the endpoint's shape.
    pub url: String,
}

impl PhotoRecord {
    pub fn new(thumbnail_url: &str, title: &str, url: &str) -> Self {
        Self {
            thumbnail_url: thumbnail_url.to_string(),
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

/// Parse a response body into records, preserving the endpoint's order.
pub fn parse_records(body: &str) -> Result<Vec<PhotoRecord>, GalleryError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_endpoint_shape_and_ignores_extra_fields() {
        let body = r#"[
            {"albumId": 2, "id": 51, "title": "first", "url": "https://x/600/1", "thumbnailUrl": "https://x/150/1"},
            {"albumId": 2, "id": 52, "title": "second", "url": "https://x/600/2", "thumbnailUrl": "https://x/150/2"}
        ]"#;

        let records = parse_records(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], PhotoRecord::new("https://x/150/1", "first", "https://x/600/1"));
        assert_eq!(records[1].title, "second");
    }

    #[test]
    fn empty_array_is_an_empty_gallery() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn non_array_bodies_are_parse_errors() {
        assert!(matches!(parse_records("{}"), Err(GalleryError::Parse(_))));
        assert!(matches!(parse_records("<html>"), Err(GalleryError::Parse(_))));
    }

    #[test]
    fn record_missing_thumbnail_is_rejected() {
        let body = r#"[{"title": "t", "url": "u"}]"#;
        assert!(matches!(parse_records(body), Err(GalleryError::Parse(_))));
    }
}
