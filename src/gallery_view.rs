use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Event, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use tasquirre_core::gallery::{PLACEHOLDER_ICON, PLACEHOLDER_LABEL};
use tasquirre_core::markup::{
    gallery_mount_id, GALLERY_NEXT_ATTR, GALLERY_NEXT_SELECTOR, GALLERY_PREV_ATTR,
    GALLERY_PREV_SELECTOR,
};
use tasquirre_core::{build_cards, gallery_keys, CardImageState, CardViewModel, ScrollDirection};

use crate::dom;
use crate::modal_view::ModalController;

/// Source and caption handed to the modal when a card is clicked.
pub(crate) type OpenRequest = (String, String);

#[derive(Properties, PartialEq)]
pub(crate) struct GalleryRowProps {
    pub(crate) cards: Rc<Vec<CardViewModel>>,
    pub(crate) on_open: Callback<OpenRequest>,
}

#[function_component(GalleryRow)]
pub(crate) fn gallery_row(props: &GalleryRowProps) -> Html {
    props
        .cards
        .iter()
        .map(|card| {
            html! {
                <GalleryCard
                    key={card.index}
                    card={card.clone()}
                    on_open={props.on_open.clone()}
                />
            }
        })
        .collect::<Html>()
}

#[derive(Properties, PartialEq)]
pub(crate) struct GalleryCardProps {
    pub(crate) card: CardViewModel,
    pub(crate) on_open: Callback<OpenRequest>,
}

#[function_component(GalleryCard)]
pub(crate) fn gallery_card(props: &GalleryCardProps) -> Html {
    let image_state = use_state(CardImageState::default);
    let card = &props.card;

    let onerror = {
        let image_state = image_state.clone();
        Callback::from(move |_: Event| {
            let mut next = *image_state;
            if next.fail() {
                image_state.set(next);
            }
        })
    };
    let onload = {
        let image_state = image_state.clone();
        Callback::from(move |_: Event| {
            let mut next = *image_state;
            next.load();
            if next != *image_state {
                image_state.set(next);
            }
        })
    };
    let onclick = {
        let on_open = props.on_open.clone();
        let request = (card.src.clone(), card.modal_caption.clone());
        Callback::from(move |_: MouseEvent| on_open.emit(request.clone()))
    };

    let media = if image_state.shows_image() {
        html! {
            <img
                src={card.src.clone()}
                alt={card.alt.clone()}
                loading={if card.lazy { "lazy" } else { "eager" }}
                {onerror}
                {onload}
            />
        }
    } else {
        html! {
            <div class="gcard__placeholder">
                {PLACEHOLDER_ICON}
                <br />
                <span>{PLACEHOLDER_LABEL}</span>
            </div>
        }
    };

    html! {
        <button type="button" class="gcard" aria-label={card.aria_label.clone()} {onclick}>
            <div class="gcard__img">{media}</div>
            <div class="gcard__meta">
                <div class="gcard__title">{card.title.clone()}</div>
                <div class="gcard__cap">{card.caption.clone()}</div>
            </div>
        </button>
    }
}

/// Renders one category into `#gallery-<category>`. Returns false when the
/// mount point is missing.
pub(crate) fn mount_gallery(category: &str, modal: &Rc<ModalController>) -> bool {
    let Some(mount) = dom::element_by_id(&gallery_mount_id(category)) else {
        return false;
    };
    mount.set_inner_html("");
    let modal = Rc::clone(modal);
    let props = GalleryRowProps {
        cards: Rc::new(build_cards(category)),
        on_open: Callback::from(move |(source, caption): OpenRequest| {
            modal.open(&source, &caption);
        }),
    };
    yew::Renderer::<GalleryRow>::with_root_and_props(mount, props).render();
    true
}

pub(crate) fn mount_all(modal: &Rc<ModalController>) {
    let mounted = gallery_keys()
        .filter(|category| mount_gallery(category, modal))
        .count();
    gloo::console::log!("galleries mounted", mounted);
}

pub(crate) fn bind_scroll_controls(step_px: f64) -> Vec<EventListener> {
    let controls = [
        (GALLERY_PREV_SELECTOR, GALLERY_PREV_ATTR, ScrollDirection::Prev),
        (GALLERY_NEXT_SELECTOR, GALLERY_NEXT_ATTR, ScrollDirection::Next),
    ];
    controls
        .into_iter()
        .flat_map(|(selector, attr, direction)| {
            dom::query_all(selector).into_iter().map(move |button| {
                let target = button.clone();
                EventListener::new(&button, "click", move |_| {
                    if let Some(category) = target.get_attribute(attr) {
                        scroll_gallery(&category, direction, step_px);
                    }
                })
            })
        })
        .collect()
}

fn scroll_gallery(category: &str, direction: ScrollDirection, step_px: f64) {
    let Some(row) = dom::element_by_id(&gallery_mount_id(category)) else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_left(direction.offset(step_px));
    options.set_behavior(ScrollBehavior::Smooth);
    row.scroll_by_with_scroll_to_options(&options);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    use tasquirre_core::markup::{MODAL_CAPTION_ID, MODAL_ID};

    use crate::dom::fixture;

    wasm_bindgen_test_configure!(run_in_browser);

    fn attach(tag: &str, id: &str, inner: &str) -> Element {
        let document = dom::document().expect("document available");
        let element = document.create_element(tag).expect("create element");
        element.set_id(id);
        element.set_inner_html(inner);
        document
            .body()
            .expect("body available")
            .append_child(&element)
            .expect("attach element");
        element
    }

    fn cards_in(mount: &Element) -> Vec<HtmlElement> {
        let list = mount.query_selector_all(".gcard").expect("query cards");
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    #[wasm_bindgen_test(async)]
    async fn product_cards_render_in_order_and_open_modal() {
        let modal_root = attach("div", MODAL_ID, r#"<img id="modalImg" /><p id="modalCap"></p>"#);
        let mount = attach("div", "gallery-product", "<p>stale</p>");
        let modal = ModalController::from_document();

        assert!(mount_gallery("product", &modal));
        TimeoutFuture::new(0).await;

        let cards = cards_in(&mount);
        assert_eq!(cards.len(), 5);
        let labels: Vec<String> = cards
            .iter()
            .filter_map(|card| card.get_attribute("aria-label"))
            .collect();
        assert_eq!(labels[0], "Open Product Photo 1");
        assert_eq!(labels[4], "Open Product Photo 5");
        assert!(mount.query_selector("p").ok().flatten().is_none());

        cards[2].click();
        assert!(modal.is_open());
        let caption = dom::element_by_id(MODAL_CAPTION_ID).expect("caption");
        assert_eq!(
            caption.text_content().as_deref(),
            Some("Product Photo 3 — Isi caption product kamu")
        );

        mount.remove();
        modal_root.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn failing_images_become_single_placeholders() {
        let mount = attach("div", "gallery-entre", "");
        let modal = ModalController::from_document();
        assert!(mount_gallery("entre", &modal));
        TimeoutFuture::new(0).await;

        let list = mount.query_selector_all("img").expect("query images");
        let images: Vec<Element> = (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        let error = Event::new("error").expect("error event");
        for image in &images {
            let _ = image.dispatch_event(&error);
        }
        TimeoutFuture::new(0).await;
        for image in &images {
            let _ = image.dispatch_event(&error);
        }
        TimeoutFuture::new(0).await;

        let cards = cards_in(&mount);
        assert_eq!(cards.len(), 5);
        for card in &cards {
            assert!(card.query_selector("img").ok().flatten().is_none());
            let placeholders = card
                .query_selector_all(".gcard__placeholder")
                .expect("query placeholders");
            assert_eq!(placeholders.length(), 1);
        }

        mount.remove();
    }

    #[wasm_bindgen_test]
    fn missing_mount_is_a_no_op() {
        let modal = ModalController::from_document();
        assert!(!mount_gallery("bisanara", &modal));
        assert!(!mount_gallery("unknown", &modal));
    }

    #[wasm_bindgen_test(async)]
    async fn direction_controls_scroll_their_row_by_one_step() {
        let root = fixture::mount(
            r#"<button id="wideBack" data-gprev="wide"></button>
               <button id="wideOn" data-gnext="wide"></button>
               <div id="gallery-wide" style="width:100px;overflow-x:scroll;white-space:nowrap">
                 <div style="display:inline-block;width:1000px;height:10px"></div>
               </div>"#,
        );
        let listeners = bind_scroll_controls(60.0);
        assert_eq!(listeners.len(), 2);
        let row = dom::element_by_id("gallery-wide").expect("row");
        let button = |id: &str| dom::html_element_by_id(id).expect("control");

        button("wideOn").click();
        fixture::settle().await;
        fixture::assert_near(row.scroll_left(), 60);

        button("wideBack").click();
        fixture::settle().await;
        fixture::assert_near(row.scroll_left(), 0);

        drop(listeners);
        root.remove();
    }
}
