use serde::{Deserialize, Serialize};

use crate::card::{fade_animation, CardClasses};
use crate::error::GalleryError;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/albums/2/photos";
pub const DEFAULT_GALLERY_ID: &str = "video-gallery";
pub const DEFAULT_COUNT_ID: &str = "video-count";

/// Length of the fade-out animation.
pub const FADE_MS: u32 = 1500;
/// Delay between a click and the card's removal. Shorter than the fade, so the card
/// leaves the container just before the animation ends.
pub const REMOVAL_DELAY_MS: u32 = 1300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GallerySettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_gallery_id")]
    pub gallery_id: String,
    #[serde(default = "default_count_id")]
    pub count_id: String,
    #[serde(default = "default_fade_animation")]
    pub fade_animation: String,
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u32,
    #[serde(default = "default_removal_delay_ms")]
    pub removal_delay_ms: u32,
    #[serde(default)]
    pub classes: CardClasses,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_gallery_id() -> String {
    DEFAULT_GALLERY_ID.to_string()
}

fn default_count_id() -> String {
    DEFAULT_COUNT_ID.to_string()
}

fn default_fade_animation() -> String {
    "fade-out".to_string()
}

fn default_fade_ms() -> u32 {
    FADE_MS
}

fn default_removal_delay_ms() -> u32 {
    REMOVAL_DELAY_MS
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            gallery_id: default_gallery_id(),
            count_id: default_count_id(),
            fade_animation: default_fade_animation(),
            fade_ms: default_fade_ms(),
            removal_delay_ms: default_removal_delay_ms(),
            classes: CardClasses::default(),
        }
    }
}

impl GallerySettings {
    /// Parse and validate a JSON settings object. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, GalleryError> {
        let settings: Self =
            serde_json::from_str(raw).map_err(|e| GalleryError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), GalleryError> {
        let required = [
            ("endpoint", &self.endpoint),
            ("gallery_id", &self.gallery_id),
            ("count_id", &self.count_id),
            ("fade_animation", &self.fade_animation),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(GalleryError::Config(format!("{name} must not be empty")));
            }
        }
        if self.fade_ms == 0 {
            return Err(GalleryError::Config("fade_ms must be positive".to_string()));
        }
        if self.removal_delay_ms > self.fade_ms {
            tracing::warn!(
                fade_ms = self.fade_ms,
                removal_delay_ms = self.removal_delay_ms,
                "removal delay outlasts the fade; cards will sit invisible before removal"
            );
        }
        Ok(())
    }

    /// CSS shorthand handed to the host when a card starts fading.
    pub fn fade_shorthand(&self) -> String {
        fade_animation(&self.fade_animation, self.fade_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_contract() {
        let s = GallerySettings::default();
        assert_eq!(s.gallery_id, "video-gallery");
        assert_eq!(s.count_id, "video-count");
        assert_eq!(s.fade_ms, 1500);
        assert_eq!(s.removal_delay_ms, 1300);
        assert!(s.removal_delay_ms < s.fade_ms);
        assert_eq!(s.fade_shorthand(), "fade-out 1.5s forwards");
        assert!(s.validate().is_ok());
    }

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(GallerySettings::from_json("{}").unwrap(), GallerySettings::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let s = GallerySettings::from_json(
            r#"{"endpoint": "/photos.json", "classes": {"card": "tile"}}"#,
        )
        .unwrap();
        assert_eq!(s.endpoint, "/photos.json");
        assert_eq!(s.classes.card, "tile");
        assert_eq!(s.classes.thumbnail, "video-thumbnail");
        assert_eq!(s.removal_delay_ms, REMOVAL_DELAY_MS);
    }

    #[test]
    fn rejects_unknown_fields_and_bad_values() {
        assert!(matches!(
            GallerySettings::from_json(r#"{"endpont": "x"}"#),
            Err(GalleryError::Config(_))
        ));
        assert!(matches!(
            GallerySettings::from_json(r#"{"gallery_id": "  "}"#),
            Err(GalleryError::Config(_))
        ));
        assert!(matches!(
            GallerySettings::from_json(r#"{"fade_ms": 0}"#),
            Err(GalleryError::Config(_))
        ));
    }

    #[test]
    fn long_removal_delay_is_allowed() {
        let s = GallerySettings::from_json(r#"{"removal_delay_ms": 5000}"#).unwrap();
        assert_eq!(s.removal_delay_ms, 5000);
    }
}
