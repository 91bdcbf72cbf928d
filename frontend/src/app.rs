//! Page-load boot sequence.

use accordion_shared::controller;
use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::dom::{document, document_root, WebHost};
use crate::error::ControllerError;
use crate::watcher;

fn attach_document() {
    match document_root() {
        Ok(root) => {
            controller::attach(&WebHost, &root);
        }
        Err(err) => log::error!("Cannot attach accordions: {}", err),
    }
}

/// Attaches every accordion on the page once it is parsed, then keeps
/// watching for accordions inserted later.
pub fn run() -> Result<(), ControllerError> {
    let document = document()?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::wrap(Box::new(move |_: Event| {
            attach_document();
        }) as Box<dyn FnMut(Event)>);
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
    } else {
        attach_document();
    }

    watcher::start()?;
    Ok(())
}
