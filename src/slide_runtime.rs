use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};

use tasquirre_core::markup::{
    DOT_SELECTOR, DOT_TARGET_ATTR, FRAGMENT_LINK_SELECTOR, NEXT_BUTTON_ID, PREV_BUTTON_ID,
    SLIDES_CONTAINER_ID, SLIDE_SELECTOR,
};
use tasquirre_core::{
    map_key, AnchorId, KeyCommand, NavIntent, Navigator, ScrollSurface, ScrollTarget, SlideDeck,
};

use crate::dom;
use crate::modal_view::ModalController;

/// The `#slides` container and its `.slide` children as a scroll surface.
pub(crate) struct DomSurface {
    container: HtmlElement,
    slides: Vec<HtmlElement>,
}

impl ScrollSurface for DomSurface {
    fn scroll_top(&self) -> f64 {
        f64::from(self.container.scroll_top())
    }

    fn slide_tops(&self) -> Vec<f64> {
        self.slides
            .iter()
            .map(|slide| f64::from(slide.offset_top()))
            .collect()
    }

    fn has_anchor(&self, id: &AnchorId) -> bool {
        dom::element_by_id(id.as_str()).is_some()
    }

    fn scroll_into_view(&self, target: &ScrollTarget) {
        let element: Option<Element> = match target {
            ScrollTarget::Slide(index) => self
                .slides
                .get(*index)
                .map(|slide| slide.clone().unchecked_into::<Element>()),
            ScrollTarget::Anchor(id) => dom::element_by_id(id.as_str()),
        };
        if let Some(element) = element {
            dom::smooth_scroll_into_view(&element);
        }
    }
}

/// Every navigation trigger on the page ends up in this controller.
pub(crate) struct SlideController {
    navigator: Navigator,
    surface: DomSurface,
}

impl SlideController {
    pub(crate) fn from_document() -> Option<Rc<Self>> {
        let Some(container) = dom::html_element_by_id(SLIDES_CONTAINER_ID) else {
            gloo::console::warn!("slides container missing", SLIDES_CONTAINER_ID);
            return None;
        };
        let slides: Vec<HtmlElement> = dom::query_all(SLIDE_SELECTOR)
            .into_iter()
            .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
            .collect();
        let ids = match slides
            .iter()
            .map(|slide| AnchorId::parse(&slide.id()))
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(ids) => ids,
            Err(err) => {
                gloo::console::warn!("slide without a usable id", err.to_string());
                return None;
            }
        };
        let deck = match SlideDeck::new(ids) {
            Ok(deck) => deck,
            Err(err) => {
                gloo::console::warn!("slide deck unavailable", err.to_string());
                return None;
            }
        };
        Some(Rc::new(Self {
            navigator: Navigator::new(deck),
            surface: DomSurface { container, slides },
        }))
    }

    pub(crate) fn deck(&self) -> &SlideDeck {
        self.navigator.deck()
    }

    pub(crate) fn container(&self) -> &HtmlElement {
        &self.surface.container
    }

    pub(crate) fn slide_elements(&self) -> &[HtmlElement] {
        &self.surface.slides
    }

    pub(crate) fn navigate(&self, intent: NavIntent) -> usize {
        self.navigator.navigate(&self.surface, intent)
    }

    pub(crate) fn go_to_hash(&self, selector: &str) -> bool {
        self.navigator.go_to_hash(&self.surface, selector).is_some()
    }

    pub(crate) fn bind_buttons(self: &Rc<Self>) -> Vec<EventListener> {
        [(PREV_BUTTON_ID, NavIntent::Previous), (NEXT_BUTTON_ID, NavIntent::Next)]
            .into_iter()
            .filter_map(|(id, intent)| {
                let button = dom::element_by_id(id)?;
                let slides = Rc::clone(self);
                Some(EventListener::new(&button, "click", move |_| {
                    slides.navigate(intent);
                }))
            })
            .collect()
    }

    pub(crate) fn bind_dots(self: &Rc<Self>) -> Vec<EventListener> {
        dom::query_all(DOT_SELECTOR)
            .into_iter()
            .map(|dot| {
                let slides = Rc::clone(self);
                let target = dot.clone();
                EventListener::new(&dot, "click", move |_| {
                    if let Some(selector) = target.get_attribute(DOT_TARGET_ATTR) {
                        slides.go_to_hash(&selector);
                    }
                })
            })
            .collect()
    }

    /// In-page `#` links scroll smoothly; links to nothing keep the
    /// browser's default behavior.
    pub(crate) fn bind_fragment_links(self: &Rc<Self>) -> Vec<EventListener> {
        dom::query_all(FRAGMENT_LINK_SELECTOR)
            .into_iter()
            .map(|link| {
                let slides = Rc::clone(self);
                let anchor = link.clone();
                EventListener::new_with_options(
                    &link,
                    "click",
                    active_options(),
                    move |event: &Event| {
                        let Some(href) = anchor.get_attribute("href") else {
                            return;
                        };
                        if slides.go_to_hash(&href) {
                            event.prevent_default();
                        }
                    },
                )
            })
            .collect()
    }
}

/// One keydown handler for the whole page: the modal gets Escape first,
/// everything else is slide navigation.
pub(crate) fn bind_keyboard(
    modal: Rc<ModalController>,
    slides: Option<Rc<SlideController>>,
) -> Option<EventListener> {
    let window = web_sys::window()?;
    Some(EventListener::new_with_options(
        &window,
        "keydown",
        active_options(),
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let outcome = map_key(&event.key(), modal.is_open());
            match outcome.command {
                Some(KeyCommand::CloseModal) => modal.close(),
                Some(KeyCommand::Navigate(intent)) => {
                    let Some(slides) = slides.as_ref() else {
                        return;
                    };
                    if outcome.prevent_default {
                        event.prevent_default();
                    }
                    slides.navigate(intent);
                }
                None => {}
            }
        },
    ))
}

fn active_options() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}
