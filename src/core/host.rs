//! Seams between the gallery logic and whatever actually displays it.
//!
//! The browser crate implements these over `web_sys`; unit tests implement them
//! in memory with a manual clock.

use std::rc::Rc;
use std::time::Duration;

use crate::card::CardSpec;
use crate::error::GalleryError;
use crate::record::PhotoRecord;

/// Click callback attached to a card. Receives the card that was clicked.
pub type ClickHandler<C> = Rc<dyn Fn(&C)>;

/// Owner of the gallery container and the count display.
///
/// Handles are cheap to clone (reference-counted DOM nodes or shared test state),
/// and everything runs on one thread.
pub trait CardHost: Clone + 'static {
    type Card: Clone + 'static;

    /// Create a detached card and wire `on_click` to it.
    fn build_card(&self, spec: &CardSpec, on_click: ClickHandler<Self::Card>) -> Self::Card;

    /// Append cards to the container, keeping the given order.
    fn append_cards(&self, cards: &[Self::Card]);

    /// Start the card's fade-out animation (`animation` is a CSS shorthand).
    fn start_fade(&self, card: &Self::Card, animation: &str);

    /// Detach the card from its parent. A card that is already detached is left alone.
    fn remove_card(&self, card: &Self::Card);

    /// Live number of child elements in the container.
    fn card_count(&self) -> usize;

    /// Replace the count display's content with plain text.
    fn set_count_text(&self, text: &str);
}

/// One-shot deferred actions. Scheduled actions always run; there is no cancel.
pub trait Timers: Clone + 'static {
    fn schedule(&self, delay: Duration, action: Box<dyn FnOnce()>);
}

/// Where the photo list comes from. Awaiting it is the loader's only suspension point.
#[allow(async_fn_in_trait)]
pub trait PhotoSource {
    async fn fetch_photos(&self) -> Result<Vec<PhotoRecord>, GalleryError>;
}
