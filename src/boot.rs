use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;

use tasquirre_core::{plan_startup, AnchorId, StartupPlan, VisibilityObserver};

use crate::app_router;
use crate::app_runtime;
use crate::dom;
use crate::gallery_view;
use crate::modal_view::ModalController;
use crate::slide_runtime::{self, SlideController};
use crate::visibility_runtime;

pub(crate) fn start() {
    // The visibility binding rewrites the hash as soon as a slide shows, so
    // the incoming fragment has to be read first.
    let fragment = app_router::current_fragment();
    let config = app_runtime::config();

    let modal = ModalController::from_document();
    if let Some(listener) = modal.bind_close() {
        app_runtime::keep_listener(listener);
    }
    gallery_view::mount_all(&modal);
    app_runtime::keep_listeners(gallery_view::bind_scroll_controls(config.gallery_step_px));

    let slides = SlideController::from_document();
    let visibility = slides.as_ref().map(|slides| {
        app_runtime::keep_listeners(slides.bind_buttons());
        app_runtime::keep_listeners(slides.bind_dots());
        app_runtime::keep_listeners(slides.bind_fragment_links());
        let binding = visibility_runtime::observe_slides(slides, config.visibility_threshold);
        let observer = binding.observer();
        app_runtime::retain(binding);
        observer
    });
    if let Some(listener) = slide_runtime::bind_keyboard(Rc::clone(&modal), slides.clone()) {
        app_runtime::keep_listener(listener);
    }

    let settle_delay_ms = config.settle_delay_ms;
    on_page_loaded(move || {
        run_startup_plan(&fragment, slides.as_ref(), visibility.as_deref(), settle_delay_ms);
    });
}

fn on_page_loaded<F>(action: F)
where
    F: FnOnce() + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let complete = window
        .document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false);
    if complete {
        action();
        return;
    }
    app_runtime::keep_listener(EventListener::once(&window, "load", move |_| action()));
}

fn run_startup_plan(
    fragment: &str,
    slides: Option<&Rc<SlideController>>,
    visibility: Option<&VisibilityObserver>,
    settle_delay_ms: u32,
) -> StartupPlan {
    let plan = plan_startup(fragment, settle_delay_ms, |anchor| {
        dom::element_by_id(anchor.as_str()).is_some()
    });
    match &plan {
        StartupPlan::ScrollToFragment { anchor, delay_ms } => {
            gloo::console::log!("startup: fragment target", anchor.fragment(), *delay_ms);
            let slides = slides.cloned();
            let anchor = anchor.clone();
            Timeout::new(*delay_ms, move || scroll_to_fragment(slides.as_deref(), &anchor))
                .forget();
        }
        StartupPlan::RevealFirst => {
            if !fragment.is_empty() {
                gloo::console::warn!("startup: fragment matches nothing", fragment);
            }
            if let Some(visibility) = visibility {
                visibility.reveal(0);
            }
        }
    }
    plan
}

/// Without a usable deck the element is still scrolled to directly.
fn scroll_to_fragment(slides: Option<&SlideController>, anchor: &AnchorId) {
    match slides {
        Some(slides) => {
            slides.go_to_hash(&anchor.fragment());
        }
        None => {
            if let Some(element) = dom::element_by_id(anchor.as_str()) {
                dom::smooth_scroll_into_view(&element);
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    use tasquirre_core::markup::VISIBLE_CLASS;

    use crate::dom::fixture;

    wasm_bindgen_test_configure!(run_in_browser);

    const DECK: &str = r##"
        <div id="slides" style="position:relative;height:100px;overflow-y:scroll">
          <section class="slide" id="b0" style="height:100px"></section>
          <section class="slide" id="b1" style="height:100px"></section>
          <section class="slide" id="b2" style="height:100px"></section>
        </div>
        <nav>
          <button class="dot is-active" data-target="#b0"></button>
          <button class="dot" data-target="#b1"></button>
          <button class="dot" data-target="#b2"></button>
        </nav>"##;

    fn first_slide_visible() -> bool {
        dom::element_by_id("b0")
            .expect("first slide")
            .class_list()
            .contains(VISIBLE_CLASS)
    }

    #[wasm_bindgen_test(async)]
    async fn slide_fragment_is_scrolled_to_without_revealing_first() {
        let root = fixture::mount(DECK);
        let slides = SlideController::from_document().expect("slide controller");
        let binding = visibility_runtime::observe_slides(&slides, 0.55);
        let observer = binding.observer();

        let plan = run_startup_plan("#b1", Some(&slides), Some(&*observer), 0);
        let StartupPlan::ScrollToFragment { anchor, delay_ms } = plan else {
            panic!("expected fragment scroll, got {plan:?}");
        };
        assert_eq!(anchor.as_str(), "b1");
        assert_eq!(delay_ms, 0);
        assert!(!first_slide_visible());
        assert!(!observer.is_revealed(0));

        fixture::settle().await;
        fixture::assert_near(slides.container().scroll_top(), 100);

        drop(binding);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn empty_or_unknown_fragment_reveals_first_slide() {
        let root = fixture::mount(DECK);
        let slides = SlideController::from_document().expect("slide controller");
        let binding = visibility_runtime::observe_slides(&slides, 0.55);
        let observer = binding.observer();

        let plan = run_startup_plan("#ghost", Some(&slides), Some(&*observer), 0);
        assert_eq!(plan, StartupPlan::RevealFirst);
        assert!(first_slide_visible());

        let plan = run_startup_plan("", Some(&slides), Some(&*observer), 0);
        assert_eq!(plan, StartupPlan::RevealFirst);
        assert!(observer.is_revealed(0));

        drop(binding);
        root.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn element_fragment_scrolls_without_a_deck() {
        let root = fixture::mount(
            r#"<div id="pane" style="position:relative;height:100px;overflow-y:scroll">
                 <div style="height:300px"></div>
                 <p id="late-note" style="height:100px;margin:0">note</p>
                 <div style="height:300px"></div>
               </div>"#,
        );

        let plan = run_startup_plan("#late-note", None, None, 0);
        assert!(matches!(plan, StartupPlan::ScrollToFragment { .. }));

        fixture::settle().await;
        let pane = dom::element_by_id("pane").expect("pane");
        fixture::assert_near(pane.scroll_top(), 300);

        root.remove();
    }
}
