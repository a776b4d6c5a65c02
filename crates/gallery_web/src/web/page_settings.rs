use gallery::GallerySettings;

/// `<script type="application/json" id="gallery-settings">` overrides the defaults.
const SETTINGS_ELEMENT_ID: &str = "gallery-settings";

pub(super) fn load_page_settings() -> GallerySettings {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SETTINGS_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        return GallerySettings::default();
    };

    match GallerySettings::from_json(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "ignoring page settings, using defaults");
            GallerySettings::default()
        }
    }
}
