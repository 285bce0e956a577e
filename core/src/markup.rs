//! Ids, classes and data attributes the page markup has to provide.

pub const SLIDES_CONTAINER_ID: &str = "slides";
pub const SLIDE_SELECTOR: &str = ".slide";
pub const DOT_SELECTOR: &str = ".dot";
pub const DOT_TARGET_ATTR: &str = "data-target";
pub const PREV_BUTTON_ID: &str = "btnPrev";
pub const NEXT_BUTTON_ID: &str = "btnNext";
pub const FRAGMENT_LINK_SELECTOR: &str = "a[href^=\"#\"]";

pub const MODAL_ID: &str = "modal";
pub const MODAL_IMAGE_ID: &str = "modalImg";
pub const MODAL_CAPTION_ID: &str = "modalCap";
pub const MODAL_CLOSE_KEY: &str = "close";

pub const GALLERY_MOUNT_PREFIX: &str = "gallery-";
pub const GALLERY_PREV_SELECTOR: &str = "[data-gprev]";
pub const GALLERY_NEXT_SELECTOR: &str = "[data-gnext]";
pub const GALLERY_PREV_ATTR: &str = "data-gprev";
pub const GALLERY_NEXT_ATTR: &str = "data-gnext";

pub const CONFIG_SCRIPT_ID: &str = "catalog-config";

pub const VISIBLE_CLASS: &str = "is-visible";
pub const ACTIVE_CLASS: &str = "is-active";
pub const OPEN_CLASS: &str = "is-open";

pub fn gallery_mount_id(category: &str) -> String {
    format!("{GALLERY_MOUNT_PREFIX}{}", category.trim())
}

pub fn fragment_for(id: &str) -> String {
    format!("#{id}")
}
