//! Photo card gallery.
//!
//! Fetches a list of photo records, renders each one as a clickable card, and lets
//! the user dismiss cards one at a time (fade, then removal) while a count display
//! tracks how many remain.
//!
//! This crate holds the host-independent part. Display, timers and the network are
//! reached through the traits in [`host`]; `crates/gallery_web` implements them for
//! the browser.

#[path = "core/card.rs"]
pub mod card;

#[path = "core/count.rs"]
pub mod count;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/gallery.rs"]
pub mod gallery;

#[path = "core/host.rs"]
pub mod host;

#[path = "core/record.rs"]
pub mod record;

#[path = "core/settings.rs"]
pub mod settings;

#[cfg(test)]
#[path = "core/testing.rs"]
pub(crate) mod testing;

pub use card::{CardClasses, CardPhase, CardSpec};
pub use count::{count_label, update_count};
pub use error::GalleryError;
pub use gallery::Gallery;
pub use host::{CardHost, ClickHandler, PhotoSource, Timers};
pub use record::{parse_records, PhotoRecord};
pub use settings::GallerySettings;
