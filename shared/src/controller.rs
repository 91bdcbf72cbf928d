//! Discovery, attachment and the event entry points of the controller.
//!
//! No state is held here: policy and open state live on the document nodes,
//! and the host keys attachment weakly by header, so forgetting a node
//! forgets everything about it.

use crate::host::{Host, Section};
use crate::keyboard::{Command, Key};
use crate::markers::{
    self, ALLOW_MULTIPLE_ATTR, ATTACHED_ATTR, EXPANDED_ATTR, HIDDEN_ATTR, OPEN_ATTR, OPEN_CLASS,
    POLICY_ATTR, WIDGET_CLASS,
};
use crate::state::{apply_state, toggle, Effect, Policy, SectionState};

/// What one attachment pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttachReport {
    pub widgets: usize,
    /// Sections whose handlers were bound by this pass.
    pub bound: usize,
    /// Sections skipped because an earlier pass bound them.
    pub already_attached: usize,
    /// Sections missing a header or a content region.
    pub malformed: usize,
}

impl AttachReport {
    fn merge(&mut self, other: AttachReport) {
        self.widgets += other.widgets;
        self.bound += other.bound;
        self.already_attached += other.already_attached;
        self.malformed += other.malformed;
    }
}

/// Attaches every widget at or below `root`.
///
/// Safe to call any number of times on overlapping subtrees: a section is
/// bound at most once.
pub fn attach<H: Host>(host: &H, root: &H::Node) -> AttachReport {
    let mut report = AttachReport::default();
    if host.has_class(root, WIDGET_CLASS) {
        attach_widget(host, root, &mut report);
    }
    for widget in host.descendant_widgets(root) {
        attach_widget(host, &widget, &mut report);
    }
    if report.widgets > 0 {
        log::debug!(
            "Attached {} section(s) in {} widget(s) ({} already attached, {} malformed)",
            report.bound,
            report.widgets,
            report.already_attached,
            report.malformed
        );
    }
    report
}

/// Handles one batch of inserted nodes.
///
/// An inserted node may be a widget itself or carry widgets anywhere inside
/// it; both are attached.
pub fn attach_inserted<H: Host>(host: &H, nodes: &[H::Node]) -> AttachReport {
    let mut report = AttachReport::default();
    for node in nodes {
        report.merge(attach(host, node));
    }
    report
}

fn attach_widget<H: Host>(host: &H, widget: &H::Node, report: &mut AttachReport) {
    report.widgets += 1;
    let policy = widget_policy(host, widget);

    for node in host.sections(widget) {
        let Some(section) = resolve_section(host, &node) else {
            report.malformed += 1;
            continue;
        };
        if host.is_attached(&section) {
            report.already_attached += 1;
            continue;
        }

        let initial = SectionState::from_flag(host.attribute(&node, OPEN_ATTR).as_deref());
        render_state(host, &section, initial);
        host.bind(widget, &section, policy);
        host.mark_attached(&section);
        // Informational only; copies of the markup keep it.
        host.set_attribute(&node, ATTACHED_ATTR, markers::flag(true));
        report.bound += 1;
    }
}

/// Reads the widget's policy, caching it on the widget the first time so
/// later edits to `data-allow-multiple` are not observed.
fn widget_policy<H: Host>(host: &H, widget: &H::Node) -> Policy {
    if let Some(cached) = host
        .attribute(widget, POLICY_ATTR)
        .and_then(|value| value.parse().ok())
    {
        return cached;
    }
    let policy = Policy::from_flag(host.attribute(widget, ALLOW_MULTIPLE_ATTR).as_deref());
    host.set_attribute(widget, POLICY_ATTR, policy.as_str());
    policy
}

fn resolve_section<H: Host>(host: &H, node: &H::Node) -> Option<Section<H::Node>> {
    Some(Section {
        root: node.clone(),
        header: host.header(node)?,
        content: host.content(node)?,
    })
}

/// Well-formed sections of `widget`, in document order.
fn live_sections<H: Host>(host: &H, widget: &H::Node) -> Vec<Section<H::Node>> {
    host.sections(widget)
        .iter()
        .filter_map(|node| resolve_section(host, node))
        .collect()
}

/// Carries out one presentation effect on `section`.
pub fn execute<H: Host>(host: &H, section: &Section<H::Node>, effect: Effect) {
    match effect {
        Effect::OpenMarker(on) => host.set_class(&section.root, OPEN_CLASS, on),
        Effect::PersistFlag(open) => host.set_attribute(&section.root, OPEN_ATTR, markers::flag(open)),
        Effect::Expanded(expanded) => {
            host.set_attribute(&section.header, EXPANDED_ATTR, markers::flag(expanded))
        }
        Effect::ContentHidden(true) => host.set_attribute(&section.content, HIDDEN_ATTR, ""),
        Effect::ContentHidden(false) => host.remove_attribute(&section.content, HIDDEN_ATTR),
    }
}

/// Brings `section`'s markup in line with `state`.
pub fn render_state<H: Host>(host: &H, section: &Section<H::Node>, state: SectionState) {
    for effect in apply_state(state) {
        execute(host, section, effect);
    }
}

/// Toggles `section` within `widget`, reading open state from the live
/// open marker.
pub fn activate<H: Host>(host: &H, widget: &H::Node, section: &Section<H::Node>, policy: Policy) {
    let mut sections = live_sections(host, widget);
    let target = match sections.iter().position(|s| s.root == section.root) {
        Some(index) => index,
        None => {
            // Moved out of its widget since binding; still toggles, and
            // still closes the widget's sections when opening.
            sections.push(section.clone());
            sections.len() - 1
        }
    };

    let states: Vec<SectionState> = sections
        .iter()
        .map(|s| SectionState::from_open(host.has_class(&s.root, OPEN_CLASS)))
        .collect();

    for transition in toggle(policy, &states, target) {
        render_state(host, &sections[transition.index], transition.state);
    }
}

/// Runs the command bound to `key` for the header of `section`.
pub fn handle_key<H: Host>(
    host: &H,
    widget: &H::Node,
    section: &Section<H::Node>,
    policy: Policy,
    key: Key,
) {
    match key.command() {
        Command::Toggle => activate(host, widget, section, policy),
        Command::Focus(target) => {
            let sections = live_sections(host, widget);
            let current = sections.iter().position(|s| s.root == section.root);
            if let Some(index) = target.resolve(current, sections.len()) {
                host.focus(&sections[index].header);
            }
        }
    }
}
