use thiserror::Error;

use crate::anchor::AnchorId;

/// The fixed, ordered set of slides on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    ids: Vec<AnchorId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("slide deck has no slides")]
    Empty,
    #[error("duplicate slide id {0:?}")]
    DuplicateId(String),
}

impl SlideDeck {
    pub fn new<I>(ids: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = AnchorId>,
    {
        let mut collected: Vec<AnchorId> = Vec::new();
        for id in ids {
            if collected.contains(&id) {
                return Err(DeckError::DuplicateId(id.as_str().to_string()));
            }
            collected.push(id);
        }
        if collected.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { ids: collected })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.ids.len().saturating_sub(1)
    }

    pub fn id(&self, index: usize) -> Option<&AnchorId> {
        self.ids.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|slide| slide.as_str() == id)
    }

    pub fn clamp_index(&self, index: i64) -> usize {
        if index <= 0 {
            return 0;
        }
        usize::try_from(index)
            .map(|index| index.min(self.last_index()))
            .unwrap_or_else(|_| self.last_index())
    }
}

/// Index of the slide whose top is closest to `scroll_top`.
///
/// Ties go to the earlier slide. An empty slice yields 0.
pub fn find_current_slide(tops: &[f64], scroll_top: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (index, top) in tops.iter().enumerate() {
        let dist = (top - scroll_top).abs();
        if dist < best_dist {
            best_dist = dist;
            best = index;
        }
    }
    best
}
