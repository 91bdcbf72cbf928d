//! Structural markers shared by the renderer and the controller.

/// Class on the widget root.
pub const WIDGET_CLASS: &str = "sab-accordion";
/// Class on each section.
pub const SECTION_CLASS: &str = "sab-accordion-item";
/// Class on the section header; must be a direct child of the section.
pub const HEADER_CLASS: &str = "sab-accordion-header";
/// Class on the section content region; must be a direct child of the section.
pub const CONTENT_CLASS: &str = "sab-accordion-content";
pub const CONTENT_INNER_CLASS: &str = "sab-accordion-content-inner";
pub const TITLE_CLASS: &str = "sab-accordion-title";
pub const ICON_CLASS: &str = "sab-accordion-icon";

/// Live open marker. Source of truth for the toggle transition.
pub const OPEN_CLASS: &str = "sab-open";

pub const ALLOW_MULTIPLE_ATTR: &str = "data-allow-multiple";
pub const OPEN_ATTR: &str = "data-open";
pub const EXPANDED_ATTR: &str = "aria-expanded";
pub const HIDDEN_ATTR: &str = "hidden";

/// Set on a section once its handlers are bound. Not read back: the host
/// tracks attachment by header identity.
pub const ATTACHED_ATTR: &str = "data-sab-attached";
/// Policy cached on a widget at its first attachment.
pub const POLICY_ATTR: &str = "data-sab-policy";

/// Declarative flags are true only for the literal string `"true"`.
pub fn parse_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

pub fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
