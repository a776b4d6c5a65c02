use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::card::{CardPhase, CardSpec};
use crate::count::update_count;
use crate::error::GalleryError;
use crate::host::{CardHost, ClickHandler, PhotoSource, Timers};
use crate::record::PhotoRecord;
use crate::settings::GallerySettings;

/// Renders a photo list as dismissible cards and keeps the count display in sync.
///
/// Mount points, timers and the data source are all handed in; nothing is looked
/// up globally.
pub struct Gallery<H: CardHost, T: Timers> {
    host: H,
    timers: T,
    settings: Rc<GallerySettings>,
}

impl<H: CardHost, T: Timers> Clone for Gallery<H, T> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            timers: self.timers.clone(),
            settings: Rc::clone(&self.settings),
        }
    }
}

impl<H: CardHost, T: Timers> Gallery<H, T> {
    pub fn new(host: H, timers: T, settings: GallerySettings) -> Self {
        Self {
            host,
            timers,
            settings: Rc::new(settings),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn settings(&self) -> &GallerySettings {
        &self.settings
    }

    /// Build one detached card whose click starts its dismissal.
    pub fn build_card(&self, record: &PhotoRecord) -> H::Card {
        let spec = CardSpec::from_record(record, &self.settings.classes);
        let phase = Rc::new(Cell::new(CardPhase::Idle));
        let gallery = self.clone();
        let on_click: ClickHandler<H::Card> = Rc::new(move |card: &H::Card| {
            gallery.dismiss(card, &phase);
        });
        self.host.build_card(&spec, on_click)
    }

    /// Append one card per record, in order, then refresh the count.
    pub fn render(&self, records: &[PhotoRecord]) -> usize {
        let cards: Vec<H::Card> = records.iter().map(|r| self.build_card(r)).collect();
        self.host.append_cards(&cards);
        tracing::debug!(cards = cards.len(), "rendered gallery cards");
        self.update_count()
    }

    pub fn update_count(&self) -> usize {
        update_count(&self.host)
    }

    /// Fetch the photo list and render it. Returns the resulting card count.
    ///
    /// On failure nothing is rendered and the count display is left untouched.
    pub async fn load<S: PhotoSource>(&self, source: &S) -> Result<usize, GalleryError> {
        let records = source.fetch_photos().await?;
        tracing::info!(records = records.len(), "photo list fetched");
        Ok(self.render(&records))
    }

    fn dismiss(&self, card: &H::Card, phase: &Rc<Cell<CardPhase>>) {
        let mut p = phase.get();
        if !p.begin_fade() {
            tracing::debug!(phase = ?p, "click on a card already being dismissed");
            return;
        }
        phase.set(p);

        self.host.start_fade(card, &self.settings.fade_shorthand());

        let gallery = self.clone();
        let card = card.clone();
        let phase = Rc::clone(phase);
        let delay = Duration::from_millis(u64::from(self.settings.removal_delay_ms));
        self.timers.schedule(
            delay,
            Box::new(move || {
                gallery.host.remove_card(&card);
                let mut p = phase.get();
                p.finish();
                phase.set(p);
                let remaining = gallery.update_count();
                tracing::debug!(remaining, "card dismissed");
            }),
        );
    }
}
