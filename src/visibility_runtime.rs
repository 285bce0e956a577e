use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use tasquirre_core::markup::{ACTIVE_CLASS, DOT_SELECTOR, VISIBLE_CLASS};
use tasquirre_core::{
    IntersectionSample, VisibilityEvent, VisibilityObserver, VisibilitySubscription,
};

use crate::app_router;
use crate::dom;
use crate::slide_runtime::SlideController;

type IntersectionCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live link between the browser's `IntersectionObserver` and the
/// slide visibility state. Dropping it disconnects the observer.
pub(crate) struct VisibilityBinding {
    observer: Rc<VisibilityObserver>,
    intersection: Option<IntersectionObserver>,
    _callback: Option<IntersectionCallback>,
    _subscription: VisibilitySubscription,
}

impl VisibilityBinding {
    pub(crate) fn observer(&self) -> Rc<VisibilityObserver> {
        Rc::clone(&self.observer)
    }
}

impl Drop for VisibilityBinding {
    fn drop(&mut self) {
        if let Some(intersection) = &self.intersection {
            intersection.disconnect();
        }
    }
}

pub(crate) fn observe_slides(slides: &Rc<SlideController>, threshold: f64) -> VisibilityBinding {
    let observer = Rc::new(VisibilityObserver::new(slides.deck().clone(), threshold));
    let subscription = observer.subscribe(Rc::new(dom_applier(slides)));
    apply_dot_states(&dom::query_all(DOT_SELECTOR), observer.active_dot());

    let deck = slides.deck().clone();
    let sink = Rc::clone(&observer);
    let callback: IntersectionCallback = Closure::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let samples: Vec<IntersectionSample> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let index = deck.index_of(&entry.target().id())?;
                    Some(IntersectionSample {
                        index,
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    })
                })
                .collect();
            sink.observe_all(&samples);
        },
    );

    let options = IntersectionObserverInit::new();
    let root: &Element = slides.container();
    options.set_root(Some(root));
    options.set_threshold(&JsValue::from_f64(threshold));
    let intersection =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(intersection) => intersection,
            Err(err) => {
                gloo::console::warn!("intersection observer unavailable", err);
                return VisibilityBinding {
                    observer,
                    intersection: None,
                    _callback: None,
                    _subscription: subscription,
                };
            }
        };
    for slide in slides.slide_elements() {
        intersection.observe(slide);
    }
    VisibilityBinding {
        observer,
        intersection: Some(intersection),
        _callback: Some(callback),
        _subscription: subscription,
    }
}

fn dom_applier(slides: &Rc<SlideController>) -> impl Fn(&VisibilityEvent) {
    let slide_elements: Vec<Element> = slides
        .slide_elements()
        .iter()
        .map(|slide| slide.clone().unchecked_into::<Element>())
        .collect();
    let dots = dom::query_all(DOT_SELECTOR);
    move |event: &VisibilityEvent| match event {
        VisibilityEvent::Revealed { index } => {
            if let Some(slide) = slide_elements.get(*index) {
                dom::set_class(slide, VISIBLE_CLASS, true);
            }
        }
        VisibilityEvent::Activated { index, fragment } => {
            apply_dot_states(&dots, *index);
            app_router::replace_fragment(fragment);
        }
    }
}

fn apply_dot_states(dots: &[Element], active: usize) {
    for (index, dot) in dots.iter().enumerate() {
        dom::set_class(dot, ACTIVE_CLASS, index == active);
    }
}
