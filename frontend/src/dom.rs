//! `web_sys` implementation of the controller's [`Host`].

use accordion_shared::controller;
use accordion_shared::markers::{CONTENT_CLASS, HEADER_CLASS, SECTION_CLASS, WIDGET_CLASS};
use accordion_shared::{Host, Key, Policy, Section};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent, NodeList};

use crate::error::ControllerError;

pub fn document() -> Result<Document, ControllerError> {
    web_sys::window()
        .ok_or(ControllerError::NoWindow)?
        .document()
        .ok_or(ControllerError::NoDocument)
}

pub fn document_root() -> Result<Element, ControllerError> {
    document()?
        .document_element()
        .ok_or(ControllerError::NoDocument)
}

/// The live page. All state stays on the elements themselves, apart from
/// the set of bound headers, which holds them weakly.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebHost;

thread_local! {
    static BOUND_HEADERS: js_sys::WeakSet = js_sys::WeakSet::new();
}

fn selector(class: &str) -> String {
    format!(".{}", class)
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn child_with_class(parent: &Element, class: &str) -> Option<Element> {
    let children = parent.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .find(|child| child.class_list().contains(class))
}

fn warn_on_error(result: Result<(), JsValue>, action: &str) {
    if let Err(err) = result {
        log::warn!("Failed to {}: {:?}", action, err);
    }
}

impl Host for WebHost {
    type Node = Element;

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_class(&self, node: &Element, class: &str, on: bool) {
        let classes = node.class_list();
        let result = if on {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        warn_on_error(result, "update class list");
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        warn_on_error(node.set_attribute(name, value), "set attribute");
    }

    fn remove_attribute(&self, node: &Element, name: &str) {
        warn_on_error(node.remove_attribute(name), "remove attribute");
    }

    fn descendant_widgets(&self, node: &Element) -> Vec<Element> {
        elements(node.query_selector_all(&selector(WIDGET_CLASS)))
    }

    fn sections(&self, widget: &Element) -> Vec<Element> {
        let owner = selector(WIDGET_CLASS);
        elements(widget.query_selector_all(&selector(SECTION_CLASS)))
            .into_iter()
            .filter(|section| {
                section
                    .parent_element()
                    .and_then(|parent| parent.closest(&owner).ok().flatten())
                    .as_ref()
                    == Some(widget)
            })
            .collect()
    }

    fn header(&self, section: &Element) -> Option<Element> {
        child_with_class(section, HEADER_CLASS)
    }

    fn content(&self, section: &Element) -> Option<Element> {
        child_with_class(section, CONTENT_CLASS)
    }

    fn focus(&self, node: &Element) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            warn_on_error(element.focus(), "focus header");
        }
    }

    fn is_attached(&self, section: &Section<Element>) -> bool {
        let header: &js_sys::Object = section.header.as_ref();
        BOUND_HEADERS.with(|bound| bound.has(header))
    }

    fn mark_attached(&self, section: &Section<Element>) {
        let header: &js_sys::Object = section.header.as_ref();
        BOUND_HEADERS.with(|bound| {
            bound.add(header);
        });
    }

    fn bind(&self, widget: &Element, section: &Section<Element>, policy: Policy) {
        let on_click = {
            let widget = widget.clone();
            let section = section.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                controller::activate(&WebHost, &widget, &section, policy);
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        let on_keydown = {
            let widget = widget.clone();
            let section = section.clone();
            Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_key(&event.key()) {
                    event.prevent_default();
                    controller::handle_key(&WebHost, &widget, &section, policy, key);
                }
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };

        // Handlers are owned by JS from here on and go away with the header.
        for (event, handler) in [
            ("click", on_click.into_js_value()),
            ("keydown", on_keydown.into_js_value()),
        ] {
            warn_on_error(
                section
                    .header
                    .add_event_listener_with_callback(event, handler.unchecked_ref()),
                "bind header handler",
            );
        }
    }
}
