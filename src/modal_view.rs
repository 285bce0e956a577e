use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};

use tasquirre_core::markup::{
    MODAL_CAPTION_ID, MODAL_CLOSE_KEY, MODAL_ID, MODAL_IMAGE_ID, OPEN_CLASS,
};
use tasquirre_core::ModalState;

use crate::dom;

/// Lightbox bound to the `#modal` markup. Any of the elements may be
/// missing; the state is still tracked so keyboard handling stays correct.
pub(crate) struct ModalController {
    state: RefCell<ModalState>,
    root: Option<Element>,
    image: Option<Element>,
    caption: Option<Element>,
}

impl ModalController {
    pub(crate) fn from_document() -> Rc<Self> {
        let root = dom::element_by_id(MODAL_ID);
        if root.is_none() {
            gloo::console::warn!("modal container missing", MODAL_ID);
        }
        Rc::new(Self {
            state: RefCell::new(ModalState::new()),
            root,
            image: dom::element_by_id(MODAL_IMAGE_ID),
            caption: dom::element_by_id(MODAL_CAPTION_ID),
        })
    }

    pub(crate) fn open(&self, source: &str, caption: &str) {
        self.state.borrow_mut().open(source, caption);
        self.sync();
    }

    pub(crate) fn close(&self) {
        self.state.borrow_mut().close();
        self.sync();
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    fn sync(&self) {
        let state = self.state.borrow();
        if let Some(image) = &self.image {
            let _ = image.set_attribute("src", state.source());
        }
        if let Some(caption) = &self.caption {
            caption.set_text_content(Some(state.caption()));
        }
        if let Some(root) = &self.root {
            dom::set_class(root, OPEN_CLASS, state.is_open());
            let _ = root.set_attribute("aria-hidden", state.aria_hidden());
        }
    }

    /// Closes on clicks that land directly on a `data-close` element.
    pub(crate) fn bind_close(self: &Rc<Self>) -> Option<EventListener> {
        let root = self.root.clone()?;
        let modal = Rc::clone(self);
        Some(EventListener::new(&root, "click", move |event: &Event| {
            if is_close_trigger(event) {
                modal.close();
            }
        }))
    }
}

fn is_close_trigger(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        .and_then(|element| element.dataset().get(MODAL_CLOSE_KEY))
        .map(|value| !value.is_empty())
        .unwrap_or(false)
}
