pub mod app;
pub mod components;
pub mod dom;
pub mod error;
pub mod watcher;

use accordion_shared::controller;
use wasm_bindgen::prelude::*;

use crate::dom::WebHost;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // Ignore the error if a logger is already installed
    drop(console_log::init_with_level(log::Level::Debug));

    if let Err(err) = app::run() {
        log::error!("Accordion controller failed to start: {}", err);
    }
}

/// Attaches accordions at or below `root`. Returns the number of sections
/// bound by this call.
#[wasm_bindgen(js_name = attach)]
pub fn attach(root: &web_sys::Element) -> usize {
    controller::attach(&WebHost, root).bound
}

#[wasm_bindgen(js_name = startWatcher)]
pub fn start_watcher() -> bool {
    match watcher::start() {
        Ok(running) => running,
        Err(err) => {
            log::error!("Cannot watch for inserted accordions: {}", err);
            false
        }
    }
}

#[wasm_bindgen(js_name = stopWatcher)]
pub fn stop_watcher() -> bool {
    watcher::stop()
}
