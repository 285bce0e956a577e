use crate::anchor::AnchorId;
use crate::slides::{find_current_slide, SlideDeck};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Slide(usize),
    Anchor(AnchorId),
}

/// The scroll container as seen by the navigator.
///
/// `scroll_into_view` is expected to animate smoothly and align the target's
/// top edge with the container's top edge. A new call simply retargets.
pub trait ScrollSurface {
    fn scroll_top(&self) -> f64;
    fn slide_tops(&self) -> Vec<f64>;
    fn has_anchor(&self, id: &AnchorId) -> bool;
    fn scroll_into_view(&self, target: &ScrollTarget);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    Previous,
    Next,
    First,
    Last,
    Index(i64),
}

#[derive(Clone, Debug)]
pub struct Navigator {
    deck: SlideDeck,
}

impl Navigator {
    pub fn new(deck: SlideDeck) -> Self {
        Self { deck }
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn current_index(&self, surface: &dyn ScrollSurface) -> usize {
        let tops = surface.slide_tops();
        let index = find_current_slide(&tops, surface.scroll_top());
        index.min(self.deck.last_index())
    }

    pub fn go_to_index(&self, surface: &dyn ScrollSurface, index: i64) -> usize {
        let index = self.deck.clamp_index(index);
        surface.scroll_into_view(&ScrollTarget::Slide(index));
        index
    }

    /// Scrolls to the element a `#id` selector names. Returns `None` without
    /// scrolling when the selector is malformed or names nothing.
    pub fn go_to_hash(&self, surface: &dyn ScrollSurface, selector: &str) -> Option<ScrollTarget> {
        let anchor = AnchorId::from_fragment(selector).ok()?;
        let target = self.resolve(surface, anchor)?;
        surface.scroll_into_view(&target);
        Some(target)
    }

    pub fn resolve(&self, surface: &dyn ScrollSurface, anchor: AnchorId) -> Option<ScrollTarget> {
        if let Some(index) = self.deck.index_of(anchor.as_str()) {
            return Some(ScrollTarget::Slide(index));
        }
        surface
            .has_anchor(&anchor)
            .then_some(ScrollTarget::Anchor(anchor))
    }

    pub fn navigate(&self, surface: &dyn ScrollSurface, intent: NavIntent) -> usize {
        let target = match intent {
            NavIntent::Previous => self.current_index(surface) as i64 - 1,
            NavIntent::Next => self.current_index(surface) as i64 + 1,
            NavIntent::First => 0,
            NavIntent::Last => self.deck.last_index() as i64,
            NavIntent::Index(index) => index,
        };
        self.go_to_index(surface, target)
    }
}
