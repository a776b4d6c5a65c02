//! In-memory host, manual clock and canned source for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use crate::card::CardSpec;
use crate::error::GalleryError;
use crate::host::{CardHost, ClickHandler, PhotoSource, Timers};
use crate::record::PhotoRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct MemoryCard(usize);

struct MemoryNode {
    spec: CardSpec,
    animation: Option<String>,
    on_click: Option<ClickHandler<MemoryCard>>,
}

#[derive(Default)]
struct MemoryDom {
    next_id: usize,
    nodes: HashMap<usize, MemoryNode>,
    children: Vec<usize>,
    count_text: Option<String>,
}

impl MemoryDom {
    fn insert(&mut self, node: MemoryNode) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }
}

/// Container + count display kept in memory. Clones share the same state.
#[derive(Clone, Default)]
pub(crate) struct MemoryHost {
    dom: Rc<RefCell<MemoryDom>>,
}

impl MemoryHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn count_text(&self) -> Option<String> {
        self.dom.borrow().count_text.clone()
    }

    /// Specs of the attached children, in container order.
    pub(crate) fn cards(&self) -> Vec<CardSpec> {
        let dom = self.dom.borrow();
        dom.children
            .iter()
            .map(|id| dom.nodes[id].spec.clone())
            .collect()
    }

    pub(crate) fn animation(&self, idx: usize) -> Option<String> {
        let dom = self.dom.borrow();
        dom.nodes[&dom.children[idx]].animation.clone()
    }

    /// Click the idx-th attached child. The borrow is released before the handler runs.
    pub(crate) fn click(&self, idx: usize) {
        let (card, handler) = {
            let dom = self.dom.borrow();
            let id = dom.children[idx];
            (MemoryCard(id), dom.nodes[&id].on_click.clone())
        };
        if let Some(handler) = handler {
            handler(&card);
        }
    }

    /// Append a child the gallery did not build.
    pub(crate) fn push_foreign_child(&self) {
        let mut dom = self.dom.borrow_mut();
        let id = dom.insert(MemoryNode {
            spec: CardSpec {
                card_class: String::new(),
                image_class: String::new(),
                image_src: String::new(),
                label_class: String::new(),
                label: String::new(),
            },
            animation: None,
            on_click: None,
        });
        dom.children.push(id);
    }
}

impl CardHost for MemoryHost {
    type Card = MemoryCard;

    fn build_card(&self, spec: &CardSpec, on_click: ClickHandler<MemoryCard>) -> MemoryCard {
        let id = self.dom.borrow_mut().insert(MemoryNode {
            spec: spec.clone(),
            animation: None,
            on_click: Some(on_click),
        });
        MemoryCard(id)
    }

    fn append_cards(&self, cards: &[MemoryCard]) {
        let mut dom = self.dom.borrow_mut();
        dom.children.extend(cards.iter().map(|c| c.0));
    }

    fn start_fade(&self, card: &MemoryCard, animation: &str) {
        if let Some(node) = self.dom.borrow_mut().nodes.get_mut(&card.0) {
            node.animation = Some(animation.to_string());
        }
    }

    fn remove_card(&self, card: &MemoryCard) {
        self.dom.borrow_mut().children.retain(|&id| id != card.0);
    }

    fn card_count(&self) -> usize {
        self.dom.borrow().children.len()
    }

    fn set_count_text(&self, text: &str) {
        self.dom.borrow_mut().count_text = Some(text.to_string());
    }
}

struct Pending {
    due: Duration,
    seq: u64,
    delay: Duration,
    action: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    seq: u64,
    queue: Vec<Pending>,
}

/// Timers driven by hand: nothing fires until `advance` moves the clock past it.
#[derive(Clone, Default)]
pub(crate) struct ManualTimers {
    clock: Rc<RefCell<Clock>>,
}

impl ManualTimers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Delays of the not-yet-fired actions, in scheduling order.
    pub(crate) fn pending_delays(&self) -> Vec<Duration> {
        self.clock.borrow().queue.iter().map(|p| p.delay).collect()
    }

    /// Move the clock forward, firing due actions in (due time, schedule order).
    pub(crate) fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let idx = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                idx.map(|i| {
                    let p = clock.queue.remove(i);
                    clock.now = p.due;
                    p
                })
            };
            match next {
                Some(p) => (p.action)(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Timers for ManualTimers {
    fn schedule(&self, delay: Duration, action: Box<dyn FnOnce()>) {
        let mut clock = self.clock.borrow_mut();
        let seq = clock.seq;
        clock.seq += 1;
        let due = clock.now + delay;
        clock.queue.push(Pending {
            due,
            seq,
            delay,
            action,
        });
    }
}

/// Source that answers immediately with a fixed result.
pub(crate) struct StaticSource {
    result: Result<Vec<PhotoRecord>, String>,
}

impl StaticSource {
    pub(crate) fn ok(records: Vec<PhotoRecord>) -> Self {
        Self { result: Ok(records) }
    }

    pub(crate) fn failing(msg: &str) -> Self {
        Self {
            result: Err(msg.to_string()),
        }
    }
}

impl PhotoSource for StaticSource {
    async fn fetch_photos(&self) -> Result<Vec<PhotoRecord>, GalleryError> {
        self.result.clone().map_err(GalleryError::Fetch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_timers_fire_in_due_order() {
        let timers = ManualTimers::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (name, ms) in [("slow", 300u64), ("fast", 100), ("also-fast", 100)] {
            let log = Rc::clone(&log);
            timers.schedule(Duration::from_millis(ms), Box::new(move || log.borrow_mut().push(name)));
        }

        timers.advance(Duration::from_millis(99));
        assert!(log.borrow().is_empty());
        timers.advance(Duration::from_millis(1));
        assert_eq!(*log.borrow(), vec!["fast", "also-fast"]);
        timers.advance(Duration::from_millis(500));
        assert_eq!(*log.borrow(), vec!["fast", "also-fast", "slow"]);
        assert!(timers.pending_delays().is_empty());
    }
}
