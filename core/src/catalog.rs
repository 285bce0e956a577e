#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub src: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct GalleryCategory {
    pub key: &'static str,
    pub items: &'static [GalleryItem],
}

const PRODUCT_CAPTION: &str = "Isi caption product kamu";
const BIFEST_CAPTION: &str = "Momen booth / feedback";
const ENTRE_CAPTION: &str = "Interaksi pengunjung";
const BISANARA_CAPTION: &str = "Screen: (jelaskan halaman)";

const fn item(src: &'static str, title: &'static str, caption: &'static str) -> GalleryItem {
    GalleryItem {
        src,
        title,
        caption,
    }
}

pub const GALLERY_CATALOG: &[GalleryCategory] = &[
    GalleryCategory {
        key: "product",
        items: &[
            item("assets/product-1.jpg", "Product Photo 1", PRODUCT_CAPTION),
            item("assets/product-2.jpg", "Product Photo 2", PRODUCT_CAPTION),
            item("assets/product-3.jpg", "Product Photo 3", PRODUCT_CAPTION),
            item("assets/product-4.jpg", "Product Photo 4", PRODUCT_CAPTION),
            item("assets/product-5.jpg", "Product Photo 5", PRODUCT_CAPTION),
        ],
    },
    GalleryCategory {
        key: "bifest",
        items: &[
            item("assets/bifest-1.jpg", "BINUS Festival 1", BIFEST_CAPTION),
            item("assets/bifest-2.jpg", "BINUS Festival 2", BIFEST_CAPTION),
            item("assets/bifest-3.jpg", "BINUS Festival 3", BIFEST_CAPTION),
            item("assets/bifest-4.jpg", "BINUS Festival 4", BIFEST_CAPTION),
            item("assets/bifest-5.jpg", "BINUS Festival 5", BIFEST_CAPTION),
        ],
    },
    GalleryCategory {
        key: "entre",
        items: &[
            item("assets/entre-1.jpg", "Entre Corner 1", ENTRE_CAPTION),
            item("assets/entre-2.jpg", "Entre Corner 2", ENTRE_CAPTION),
            item("assets/entre-3.jpg", "Entre Corner 3", ENTRE_CAPTION),
            item("assets/entre-4.jpg", "Entre Corner 4", ENTRE_CAPTION),
            item("assets/entre-5.jpg", "Entre Corner 5", ENTRE_CAPTION),
        ],
    },
    GalleryCategory {
        key: "bisanara",
        items: &[
            item("assets/bisanara-1.jpg", "Bisanara Screenshot 1", BISANARA_CAPTION),
            item("assets/bisanara-2.jpg", "Bisanara Screenshot 2", BISANARA_CAPTION),
            item("assets/bisanara-3.jpg", "Bisanara Screenshot 3", BISANARA_CAPTION),
            item("assets/bisanara-4.jpg", "Bisanara Screenshot 4", BISANARA_CAPTION),
            item("assets/bisanara-5.jpg", "Bisanara Screenshot 5", BISANARA_CAPTION),
        ],
    },
];

pub fn gallery_by_key(key: &str) -> Option<&'static GalleryCategory> {
    let trimmed = key.trim();
    GALLERY_CATALOG
        .iter()
        .find(|category| category.key.eq_ignore_ascii_case(trimmed))
}

/// Items for a category in display order; unknown keys have none.
pub fn gallery_items(key: &str) -> &'static [GalleryItem] {
    gallery_by_key(key).map(|category| category.items).unwrap_or(&[])
}

pub fn gallery_keys() -> impl Iterator<Item = &'static str> {
    GALLERY_CATALOG.iter().map(|category| category.key)
}
