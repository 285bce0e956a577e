//! Intersection-driven slide visibility.
//!
//! The browser reports how much of each slide overlaps the scroll container;
//! [`VisibilityObserver`] turns those samples into reveal flags, the active
//! dot and the URL fragment to publish. Samples can come from a real
//! `IntersectionObserver` or be injected directly.

use std::cell::RefCell;
use std::rc::Rc;

use crate::slides::SlideDeck;

pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.55;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub index: usize,
    pub ratio: f64,
    pub is_intersecting: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VisibilityEvent {
    /// First time the slide has been shown. Emitted once per slide.
    Revealed { index: usize },
    /// The slide became the visible one; its dot is now the only active dot.
    Activated { index: usize, fragment: String },
}

pub type VisibilitySubscriber = Rc<dyn Fn(&VisibilityEvent)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SlideVisibility {
    NotVisible,
    Visible,
}

struct ObserverState {
    visibility: Vec<SlideVisibility>,
    revealed: Vec<bool>,
    active: usize,
}

pub struct VisibilityObserver {
    deck: SlideDeck,
    threshold: f64,
    state: RefCell<ObserverState>,
    subscribers: Rc<RefCell<Vec<VisibilitySubscriber>>>,
}

impl VisibilityObserver {
    pub fn new(deck: SlideDeck, threshold: f64) -> Self {
        let len = deck.len();
        Self {
            deck,
            threshold,
            state: RefCell::new(ObserverState {
                visibility: vec![SlideVisibility::NotVisible; len],
                revealed: vec![false; len],
                active: 0,
            }),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn subscribe(&self, subscriber: VisibilitySubscriber) -> VisibilitySubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        VisibilitySubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub fn observe_all(&self, samples: &[IntersectionSample]) {
        for sample in samples {
            self.observe(*sample);
        }
    }

    pub fn observe(&self, sample: IntersectionSample) {
        let events = {
            let mut state = self.state.borrow_mut();
            let Some(current) = state.visibility.get(sample.index).copied() else {
                return;
            };
            let next = if sample.is_intersecting && sample.ratio >= self.threshold {
                SlideVisibility::Visible
            } else {
                SlideVisibility::NotVisible
            };
            state.visibility[sample.index] = next;
            if current == SlideVisibility::Visible || next == SlideVisibility::NotVisible {
                return;
            }
            let mut events = Vec::with_capacity(2);
            if !state.revealed[sample.index] {
                state.revealed[sample.index] = true;
                events.push(VisibilityEvent::Revealed {
                    index: sample.index,
                });
            }
            state.active = sample.index;
            if let Some(id) = self.deck.id(sample.index) {
                events.push(VisibilityEvent::Activated {
                    index: sample.index,
                    fragment: id.fragment(),
                });
            }
            events
        };
        self.notify(&events);
    }

    /// Marks a slide as shown without touching the active dot or fragment.
    pub fn reveal(&self, index: usize) {
        let newly = {
            let mut state = self.state.borrow_mut();
            match state.revealed.get_mut(index) {
                Some(flag) if !*flag => {
                    *flag = true;
                    true
                }
                _ => false,
            }
        };
        if newly {
            self.notify(&[VisibilityEvent::Revealed { index }]);
        }
    }

    pub fn active_dot(&self) -> usize {
        self.state.borrow().active
    }

    pub fn dot_states(&self) -> Vec<bool> {
        let active = self.active_dot();
        (0..self.deck.len()).map(|index| index == active).collect()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.state
            .borrow()
            .revealed
            .get(index)
            .copied()
            .unwrap_or(false)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.state.borrow().visibility.get(index) == Some(&SlideVisibility::Visible)
    }

    fn notify(&self, events: &[VisibilityEvent]) {
        if events.is_empty() {
            return;
        }
        let subscribers = self.subscribers.borrow().clone();
        for event in events {
            for subscriber in &subscribers {
                subscriber(event);
            }
        }
    }
}

pub struct VisibilitySubscription {
    subscriber: VisibilitySubscriber,
    subscribers: Rc<RefCell<Vec<VisibilitySubscriber>>>,
}

impl Drop for VisibilitySubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::AnchorId;

    fn observer() -> VisibilityObserver {
        let ids = ["s0", "s1", "s2"]
            .iter()
            .map(|id| AnchorId::parse(id).unwrap());
        VisibilityObserver::new(SlideDeck::new(ids).unwrap(), DEFAULT_VISIBILITY_THRESHOLD)
    }

    fn sample(index: usize, ratio: f64) -> IntersectionSample {
        IntersectionSample {
            index,
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    #[test]
    fn below_threshold_is_not_visible() {
        let observer = observer();
        observer.observe(sample(1, 0.54));
        assert!(!observer.is_visible(1));
        assert!(!observer.is_revealed(1));
        assert_eq!(observer.active_dot(), 0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let observer = observer();
        observer.observe(sample(2, 0.55));
        assert!(observer.is_visible(2));
        assert_eq!(observer.dot_states(), vec![false, false, true]);
    }

    #[test]
    fn non_intersecting_ratio_is_ignored() {
        let observer = observer();
        observer.observe(IntersectionSample {
            index: 1,
            ratio: 0.9,
            is_intersecting: false,
        });
        assert!(!observer.is_visible(1));
    }

    #[test]
    fn reveal_survives_leaving() {
        let observer = observer();
        observer.observe(sample(1, 1.0));
        observer.observe(sample(1, 0.1));
        assert!(!observer.is_visible(1));
        assert!(observer.is_revealed(1));
    }

    #[test]
    fn dropped_subscription_stops_events() {
        let observer = observer();
        let seen = Rc::new(RefCell::new(0usize));
        let counter = seen.clone();
        let subscription = observer.subscribe(Rc::new(move |_: &VisibilityEvent| {
            *counter.borrow_mut() += 1;
        }));
        observer.observe(sample(1, 1.0));
        drop(subscription);
        observer.observe(sample(2, 1.0));
        assert_eq!(*seen.borrow(), 2);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let observer = observer();
        observer.observe(sample(7, 1.0));
        assert_eq!(observer.active_dot(), 0);
    }
}
