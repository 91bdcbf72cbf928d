//! Markup for accordion blocks, matching what the controller attaches to.

use crate::blocks::{AccordionBlock, AccordionItemBlock, Block};
use crate::markers::{
    flag, CONTENT_CLASS, CONTENT_INNER_CLASS, HEADER_CLASS, ICON_CLASS, OPEN_CLASS, SECTION_CLASS,
    TITLE_CLASS, WIDGET_CLASS,
};

/// Renders blocks to HTML. Item ids are unique within one renderer.
#[derive(Debug, Default)]
pub struct Renderer {
    next_id: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_blocks(&mut self, blocks: &[Block]) -> String {
        blocks.iter().map(|block| self.render_block(block)).collect()
    }

    pub fn render_block(&mut self, block: &Block) -> String {
        match block {
            Block::Html { html } => html.clone(),
            Block::Accordion(accordion) => self.render_accordion(accordion),
        }
    }

    pub fn render_accordion(&mut self, accordion: &AccordionBlock) -> String {
        let items: String = accordion
            .items
            .iter()
            .map(|item| self.render_item(item))
            .collect();
        format!(
            r#"<div class="{}" data-allow-multiple="{}">{}</div>"#,
            WIDGET_CLASS,
            flag(accordion.allow_multiple),
            items
        )
    }

    fn render_item(&mut self, item: &AccordionItemBlock) -> String {
        self.next_id += 1;
        let id = format!("sab-item-{}", self.next_id);
        let open = flag(item.is_open);
        let section_class = if item.is_open {
            format!("{} {}", SECTION_CLASS, OPEN_CLASS)
        } else {
            SECTION_CLASS.to_string()
        };
        let hidden = if item.is_open { "" } else { " hidden" };
        let content = self.render_blocks(&item.content);

        format!(
            concat!(
                r#"<div class="{section_class}" data-open="{open}">"#,
                r#"<button class="{header}" aria-expanded="{open}" aria-controls="{id}" type="button">"#,
                r#"<span class="{title_class}">{title}</span>"#,
                r#"<span class="{icon_class}" aria-hidden="true">{icon}</span>"#,
                r#"</button>"#,
                r#"<div id="{id}" class="{content_class}" role="region"{hidden}>"#,
                r#"<div class="{inner}">{content}</div>"#,
                r#"</div>"#,
                r#"</div>"#
            ),
            section_class = section_class,
            open = open,
            header = HEADER_CLASS,
            id = id,
            title_class = TITLE_CLASS,
            title = escape_html(&item.title),
            icon_class = ICON_CLASS,
            icon = item.icon_style.svg(),
            content_class = CONTENT_CLASS,
            hidden = hidden,
            inner = CONTENT_INNER_CLASS,
            content = content,
        )
    }
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
