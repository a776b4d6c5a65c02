use serde::{Deserialize, Serialize};

use crate::record::PhotoRecord;

/// Stylesheet class names applied to the parts of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardClasses {
    pub card: String,
    pub thumbnail: String,
    pub title: String,
}

impl Default for CardClasses {
    fn default() -> Self {
        Self {
            card: "video-card".to_string(),
            thumbnail: "video-thumbnail".to_string(),
            title: "video-title".to_string(),
        }
    }
}

/// Host-independent description of one card: a container holding an image and a
/// text label.
///
/// `image_src` and `label` are copied verbatim from the record. Hosts must set the
/// label as text content, never as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSpec {
    pub card_class: String,
    pub image_class: String,
    pub image_src: String,
    pub label_class: String,
    pub label: String,
}

impl CardSpec {
    pub fn from_record(record: &PhotoRecord, classes: &CardClasses) -> Self {
        Self {
            card_class: classes.card.clone(),
            image_class: classes.thumbnail.clone(),
            image_src: record.thumbnail_url.clone(),
            label_class: classes.title.clone(),
            label: record.title.clone(),
        }
    }
}

/// Dismissal progress of a rendered card. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPhase {
    #[default]
    Idle,
    Fading,
    Removed,
}

impl CardPhase {
    /// Idle -> Fading. Returns false (and stays put) if dismissal already started.
    pub fn begin_fade(&mut self) -> bool {
        match self {
            CardPhase::Idle => {
                *self = CardPhase::Fading;
                true
            }
            CardPhase::Fading | CardPhase::Removed => false,
        }
    }

    pub fn finish(&mut self) {
        *self = CardPhase::Removed;
    }
}

/// CSS `animation` shorthand for the fade, e.g. `fade-out 1.5s forwards`.
pub fn fade_animation(name: &str, fade_ms: u32) -> String {
    let secs = f64::from(fade_ms) / 1000.0;
    format!("{name} {secs}s forwards")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_copies_record_fields_verbatim() {
        let r = PhotoRecord::new("a.jpg?x=1&y=2", "<b>Cat</b> & \"Dog\"", "full.jpg");
        let spec = CardSpec::from_record(&r, &CardClasses::default());

        assert_eq!(spec.image_src, "a.jpg?x=1&y=2");
        assert_eq!(spec.label, "<b>Cat</b> & \"Dog\"");
        assert_eq!(spec.card_class, "video-card");
        assert_eq!(spec.image_class, "video-thumbnail");
        assert_eq!(spec.label_class, "video-title");
    }

    #[test]
    fn phase_only_moves_forward() {
        let mut p = CardPhase::default();
        assert_eq!(p, CardPhase::Idle);
        assert!(p.begin_fade());
        assert_eq!(p, CardPhase::Fading);
        assert!(!p.begin_fade());

        p.finish();
        assert_eq!(p, CardPhase::Removed);
        assert!(!p.begin_fade());
        assert_eq!(p, CardPhase::Removed);
    }

    #[test]
    fn fade_shorthand_matches_stylesheet_contract() {
        assert_eq!(fade_animation("fade-out", 1500), "fade-out 1.5s forwards");
        assert_eq!(fade_animation("fade-out", 2000), "fade-out 2s forwards");
        assert_eq!(fade_animation("vanish", 250), "vanish 0.25s forwards");
    }
}
