use serde::{Deserialize, Serialize};

// ============================================================================
// Block Types
// ============================================================================

/// One piece of page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    /// Trusted markup, emitted as is.
    Html { html: String },
    Accordion(AccordionBlock),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionBlock {
    #[serde(default)]
    pub allow_multiple: bool,
    #[serde(default)]
    pub items: Vec<AccordionItemBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionItemBlock {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub icon_style: IconStyle,
    #[serde(default)]
    pub content: Vec<Block>,
}

impl AccordionItemBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn icon(mut self, icon_style: IconStyle) -> Self {
        self.icon_style = icon_style;
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.content.push(Block::Html { html: html.into() });
        self
    }

    pub fn nested(mut self, accordion: AccordionBlock) -> Self {
        self.content.push(Block::Accordion(accordion));
        self
    }
}

// ============================================================================
// Icon Style
// ============================================================================

/// Header icon. Unknown names fall back to the chevron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconStyle {
    #[default]
    Chevron,
    Plus,
    Arrow,
}

impl IconStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconStyle::Chevron => "chevron",
            IconStyle::Plus => "plus",
            IconStyle::Arrow => "arrow",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "plus" => IconStyle::Plus,
            "arrow" => IconStyle::Arrow,
            _ => IconStyle::Chevron,
        }
    }

    pub fn svg(&self) -> &'static str {
        match self {
            IconStyle::Chevron => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<polyline points="6 9 12 15 18 9"></polyline></svg>"#
            ),
            IconStyle::Plus => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<line x1="12" y1="5" x2="12" y2="19"></line><line x1="5" y1="12" x2="19" y2="12" class="sab-icon-horizontal"></line></svg>"#
            ),
            IconStyle::Arrow => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<line x1="5" y1="12" x2="19" y2="12"></line><polyline points="12 5 19 12 12 19"></polyline></svg>"#
            ),
        }
    }
}

impl From<String> for IconStyle {
    fn from(s: String) -> Self {
        IconStyle::parse(&s)
    }
}

impl From<IconStyle> for String {
    fn from(style: IconStyle) -> Self {
        style.as_str().to_string()
    }
}
