use std::fs;

use accordion_shared::{AccordionBlock, AccordionItemBlock, Block, IconStyle, Renderer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Failed to read page document: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid page document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads the blocks of the demo page, or the built-in sample when no path
/// is configured.
pub fn load_page(path: Option<&str>) -> Result<Vec<Block>, PageError> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(sample_page()),
    }
}

pub fn sample_page() -> Vec<Block> {
    let shipping = AccordionBlock {
        allow_multiple: true,
        items: vec![
            AccordionItemBlock::new("Domestic")
                .icon(IconStyle::Plus)
                .html("<p>Orders ship within two business days.</p>"),
            AccordionItemBlock::new("International")
                .icon(IconStyle::Plus)
                .html("<p>Delivery takes one to three weeks.</p>"),
        ],
    };

    vec![
        Block::Html {
            html: "<h1>Frequently asked questions</h1>".to_string(),
        },
        Block::Accordion(AccordionBlock {
            allow_multiple: false,
            items: vec![
                AccordionItemBlock::new("What is this?")
                    .open(true)
                    .html("<p>A lightweight, accessible accordion.</p>"),
                AccordionItemBlock::new("How do I ship?")
                    .icon(IconStyle::Arrow)
                    .nested(shipping),
                AccordionItemBlock::new("Can I use the keyboard?").html(
                    "<p>Enter or Space toggles. Arrow keys, Home and End move between headers.</p>",
                ),
            ],
        }),
    ]
}

/// Renders `blocks` into a complete page that loads the controller.
///
/// `pkg_name` is inserted as is; [`crate::config::Config`] only accepts
/// names safe inside the import path.
pub fn render_document(blocks: &[Block], pkg_name: &str) -> String {
    let body = Renderer::new().render_blocks(blocks);
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>Accordion demo</title>",
            r#"<script type="module">import init from "/pkg/{pkg}.js"; init();</script>"#,
            "</head><body>{body}</body></html>\n"
        ),
        pkg = pkg_name,
        body = body,
    )
}
