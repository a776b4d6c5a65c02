use gallery::{parse_records, GalleryError, PhotoRecord, PhotoSource};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Reads the photo list with a single `fetch` GET. No retry, no timeout.
pub(super) struct HttpPhotoSource {
    url: String,
}

impl HttpPhotoSource {
    pub(super) fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl PhotoSource for HttpPhotoSource {
    async fn fetch_photos(&self) -> Result<Vec<PhotoRecord>, GalleryError> {
        let window = web_sys::window().ok_or_else(|| GalleryError::Fetch("no window".to_string()))?;

        let resp = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(|e| GalleryError::Fetch(js_error_text(&e)))?;
        let resp = resp
            .dyn_into::<web_sys::Response>()
            .map_err(|_| GalleryError::Fetch("fetch: unexpected response type".to_string()))?;
        if !resp.ok() {
            return Err(GalleryError::Status {
                status: resp.status(),
                url: self.url.clone(),
            });
        }

        let text = resp
            .text()
            .map_err(|e| GalleryError::Fetch(js_error_text(&e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| GalleryError::Fetch(js_error_text(&e)))?
            .as_string()
            .ok_or_else(|| GalleryError::Fetch("fetch: body is not text".to_string()))?;

        parse_records(&body)
    }
}

fn js_error_text(v: &JsValue) -> String {
    if let Some(s) = v.as_string() {
        return s;
    }
    match v.dyn_ref::<js_sys::Error>() {
        Some(e) => String::from(e.message()),
        None => format!("{v:?}"),
    }
}
