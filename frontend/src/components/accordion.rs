use std::cell::Cell;

use accordion_shared::controller;
use accordion_shared::markers::{
    flag, CONTENT_CLASS, CONTENT_INNER_CLASS, HEADER_CLASS, ICON_CLASS, OPEN_CLASS, SECTION_CLASS,
    TITLE_CLASS, WIDGET_CLASS,
};
use accordion_shared::IconStyle;
use leptos::*;

use crate::dom::WebHost;

thread_local! {
    static NEXT_ITEM_ID: Cell<usize> = const { Cell::new(0) };
}

/// Client-side ids use their own prefix so they never collide with
/// server-rendered `sab-item-N` ids on the same page.
fn next_item_id() -> String {
    let id = NEXT_ITEM_ID.with(|next| {
        next.set(next.get() + 1);
        next.get()
    });
    format!("sab-item-c{}", id)
}

/// Accordion container. Renders the same markup as the server and attaches
/// the controller once mounted.
#[component]
pub fn Accordion(#[prop(optional)] allow_multiple: bool, children: Children) -> impl IntoView {
    let root = create_node_ref::<html::Div>();
    root.on_load(move |div| {
        let element: web_sys::Element = (*div).clone().into();
        // Children are in place by the next frame.
        request_animation_frame(move || {
            controller::attach(&WebHost, &element);
        });
    });

    view! {
        <div class=WIDGET_CLASS data-allow-multiple=flag(allow_multiple) node_ref=root>
            {children()}
        </div>
    }
}

/// One collapsible section of an [`Accordion`].
#[component]
pub fn AccordionItem(
    #[prop(into)] title: String,
    #[prop(optional)] open: bool,
    #[prop(optional)] icon_style: IconStyle,
    children: Children,
) -> impl IntoView {
    let id = next_item_id();
    let class = if open {
        format!("{} {}", SECTION_CLASS, OPEN_CLASS)
    } else {
        SECTION_CLASS.to_string()
    };

    view! {
        <div class=class data-open=flag(open)>
            <button class=HEADER_CLASS aria-expanded=flag(open) aria-controls=id.clone() type="button">
                <span class=TITLE_CLASS>{title}</span>
                <span class=ICON_CLASS aria-hidden="true" inner_html=icon_style.svg()></span>
            </button>
            <div id=id class=CONTENT_CLASS role="region" hidden=!open>
                <div class=CONTENT_INNER_CLASS>{children()}</div>
            </div>
        </div>
    }
}
