pub mod anchor;
pub mod catalog;
pub mod config;
pub mod gallery;
pub mod keyboard;
pub mod markup;
pub mod modal;
pub mod navigation;
pub mod slides;
pub mod startup;
pub mod visibility;

pub use anchor::{AnchorError, AnchorId};
pub use catalog::{gallery_items, gallery_keys, GalleryItem};
pub use config::{CatalogConfig, ConfigError};
pub use gallery::{build_cards, compose_caption, CardImageState, CardViewModel, ScrollDirection};
pub use keyboard::{map_key, KeyCommand, KeyOutcome};
pub use modal::ModalState;
pub use navigation::{NavIntent, Navigator, ScrollSurface, ScrollTarget};
pub use slides::{find_current_slide, DeckError, SlideDeck};
pub use startup::{plan_startup, StartupPlan};
pub use visibility::{
    IntersectionSample, VisibilityEvent, VisibilityObserver, VisibilitySubscription,
};
