//! Page-wide watcher that attaches accordions inserted after load.
//!
//! One observer per page, bound to the document root. [`start`] is
//! idempotent; [`stop`] disconnects and releases the observer.

use std::cell::RefCell;

use accordion_shared::controller;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MutationObserver, MutationObserverInit, MutationRecord};

use crate::dom::{document_root, WebHost};
use crate::error::ControllerError;

struct Watcher {
    observer: MutationObserver,
    // Keeps the callback alive while the observer may call it.
    _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

thread_local! {
    static WATCHER: RefCell<Option<Watcher>> = const { RefCell::new(None) };
}

/// Whether the page can report DOM insertions.
fn supported() -> bool {
    web_sys::window()
        .map(|window| js_sys::Reflect::has(&window, &JsValue::from_str("MutationObserver")).unwrap_or(false))
        .unwrap_or(false)
}

fn inserted_elements(records: &js_sys::Array) -> Vec<Element> {
    let mut inserted = Vec::new();
    for record in records.iter() {
        let Ok(record) = record.dyn_into::<MutationRecord>() else {
            continue;
        };
        let added = record.added_nodes();
        inserted.extend(
            (0..added.length())
                .filter_map(|i| added.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok()),
        );
    }
    inserted
}

/// Starts watching. Returns `Ok(false)` when the page has no
/// `MutationObserver`; initial attachment works without it.
pub fn start() -> Result<bool, ControllerError> {
    if is_running() {
        return Ok(true);
    }
    if !supported() {
        log::info!("MutationObserver unavailable, not watching for inserted accordions");
        return Ok(false);
    }

    let root = document_root()?;
    let callback = Closure::wrap(Box::new(move |records: js_sys::Array, _: MutationObserver| {
        let inserted = inserted_elements(&records);
        if !inserted.is_empty() {
            controller::attach_inserted(&WebHost, &inserted);
        }
    }) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    observer.observe_with_options(&root, &options)?;

    WATCHER.with(|slot| {
        *slot.borrow_mut() = Some(Watcher {
            observer,
            _callback: callback,
        })
    });
    log::info!("Watching for inserted accordions");
    Ok(true)
}

/// Stops watching. Returns whether a watcher was running.
pub fn stop() -> bool {
    let Some(watcher) = WATCHER.with(|slot| slot.borrow_mut().take()) else {
        return false;
    };
    watcher.observer.disconnect();
    log::info!("Stopped watching for inserted accordions");
    true
}

pub fn is_running() -> bool {
    WATCHER.with(|slot| slot.borrow().is_some())
}
