use crate::catalog::{gallery_items, GalleryItem};

pub const DEFAULT_GALLERY_STEP_PX: f64 = 260.0;
pub const PLACEHOLDER_ICON: &str = "\u{1F4F7}";
pub const PLACEHOLDER_LABEL: &str = "Add image";

/// Everything a view needs to draw one gallery card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardViewModel {
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub aria_label: String,
    pub title: String,
    pub caption: String,
    pub modal_caption: String,
    pub lazy: bool,
}

impl CardViewModel {
    pub fn from_item(index: usize, item: &GalleryItem) -> Self {
        Self {
            index,
            src: item.src.to_string(),
            alt: item.title.to_string(),
            aria_label: format!("Open {}", item.title),
            title: item.title.to_string(),
            caption: item.caption.to_string(),
            modal_caption: compose_caption(item.title, item.caption),
            lazy: true,
        }
    }
}

pub fn compose_caption(title: &str, caption: &str) -> String {
    format!("{title} \u{2014} {caption}")
}

pub fn build_cards_from(items: &[GalleryItem]) -> Vec<CardViewModel> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| CardViewModel::from_item(index, item))
        .collect()
}

pub fn build_cards(category: &str) -> Vec<CardViewModel> {
    build_cards_from(gallery_items(category))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardImageState {
    #[default]
    Pending,
    Loaded,
    Placeholder,
}

impl CardImageState {
    /// Records a load failure. True only for the transition into the
    /// placeholder, so the swap happens once per card.
    pub fn fail(&mut self) -> bool {
        if *self == CardImageState::Placeholder {
            return false;
        }
        *self = CardImageState::Placeholder;
        true
    }

    pub fn load(&mut self) {
        if *self == CardImageState::Pending {
            *self = CardImageState::Loaded;
        }
    }

    pub fn shows_image(self) -> bool {
        self != CardImageState::Placeholder
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Prev,
    Next,
}

impl ScrollDirection {
    pub fn offset(self, step_px: f64) -> f64 {
        match self {
            ScrollDirection::Prev => -step_px,
            ScrollDirection::Next => step_px,
        }
    }
}
