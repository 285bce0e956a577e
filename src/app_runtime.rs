use std::any::Any;
use std::cell::RefCell;

use gloo::events::EventListener;
use tasquirre_core::markup::CONFIG_SCRIPT_ID;
use tasquirre_core::CatalogConfig;

use crate::dom;

thread_local! {
    static CONFIG: RefCell<Option<CatalogConfig>> = RefCell::new(None);
    static LISTENERS: RefCell<Vec<EventListener>> = RefCell::new(Vec::new());
    static RETAINED: RefCell<Vec<Box<dyn Any>>> = RefCell::new(Vec::new());
}

pub(crate) fn config() -> CatalogConfig {
    if let Some(config) = CONFIG.with(|slot| slot.borrow().clone()) {
        return config;
    }
    let config = load_config();
    CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config.clone());
    });
    config
}

fn load_config() -> CatalogConfig {
    let Some(script) = dom::element_by_id(CONFIG_SCRIPT_ID) else {
        return CatalogConfig::default();
    };
    let raw = script.text_content().unwrap_or_default();
    match CatalogConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo::console::warn!("catalog config rejected, using defaults", err.to_string());
            CatalogConfig::default()
        }
    }
}

/// Keeps a listener attached for the lifetime of the page.
pub(crate) fn keep_listener(listener: EventListener) {
    LISTENERS.with(|slot| slot.borrow_mut().push(listener));
}

pub(crate) fn keep_listeners<I>(listeners: I)
where
    I: IntoIterator<Item = EventListener>,
{
    LISTENERS.with(|slot| slot.borrow_mut().extend(listeners));
}

pub(crate) fn retain<T: 'static>(value: T) {
    RETAINED.with(|slot| slot.borrow_mut().push(Box::new(value)));
}
