//! In-memory document used by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

use crate::controller;
use crate::host::{Host, Section};
use crate::keyboard::Key;
use crate::markers::*;
use crate::state::Policy;

#[derive(Default)]
struct NodeData {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Clone)]
struct Binding {
    widget: usize,
    section: Section<usize>,
    policy: Policy,
}

/// A tree of nodes addressed by index. Node 0 is the document root.
pub struct MemoryHost {
    nodes: RefCell<Vec<NodeData>>,
    bindings: RefCell<Vec<Binding>>,
    attached: RefCell<BTreeSet<usize>>,
    focused: Cell<Option<usize>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![NodeData::default()]),
            bindings: RefCell::new(Vec::new()),
            attached: RefCell::new(BTreeSet::new()),
            focused: Cell::new(None),
        }
    }

    pub fn root(&self) -> usize {
        0
    }

    /// Creates a node with no parent.
    pub fn detached(&self, classes: &[&str]) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeData {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..NodeData::default()
        });
        nodes.len() - 1
    }

    pub fn append(&self, parent: usize, child: usize) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[child].parent = Some(parent);
        nodes[parent].children.push(child);
    }

    /// Reparents `child` under `parent`, keeping its subtree.
    pub fn move_to(&self, parent: usize, child: usize) {
        {
            let mut nodes = self.nodes.borrow_mut();
            if let Some(old) = nodes[child].parent.take() {
                nodes[old].children.retain(|&c| c != child);
            }
        }
        self.append(parent, child);
    }

    pub fn element(&self, parent: usize, classes: &[&str]) -> usize {
        let node = self.detached(classes);
        self.append(parent, node);
        node
    }

    pub fn widget(&self, parent: usize, allow_multiple: Option<&str>) -> usize {
        let widget = self.element(parent, &[WIDGET_CLASS]);
        if let Some(value) = allow_multiple {
            self.set_attribute(&widget, ALLOW_MULTIPLE_ATTR, value);
        }
        widget
    }

    /// Adds a well-formed section and returns its root.
    pub fn section(&self, widget: usize, open: bool) -> usize {
        let section = self.element(widget, &[SECTION_CLASS]);
        self.set_attribute(&section, OPEN_ATTR, flag(open));
        self.element(section, &[HEADER_CLASS]);
        self.element(section, &[CONTENT_CLASS]);
        section
    }

    pub fn header_of(&self, section: usize) -> usize {
        self.header(&section).expect("section has a header")
    }

    pub fn content_of(&self, section: usize) -> usize {
        self.content(&section).expect("section has a content region")
    }

    pub fn is_open(&self, section: usize) -> bool {
        self.has_class(&section, OPEN_CLASS)
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused.get()
    }

    pub fn bindings_on(&self, header: usize) -> usize {
        self.bindings
            .borrow()
            .iter()
            .filter(|b| b.section.header == header)
            .count()
    }

    fn bindings_for(&self, header: usize) -> Vec<Binding> {
        self.bindings
            .borrow()
            .iter()
            .filter(|b| b.section.header == header)
            .cloned()
            .collect()
    }

    /// Fires every click handler bound to `header`.
    pub fn click(&self, header: usize) {
        for binding in self.bindings_for(header) {
            controller::activate(self, &binding.widget, &binding.section, binding.policy);
        }
    }

    /// Fires every keydown handler bound to `header`.
    pub fn press(&self, header: usize, key: &str) {
        let Some(key) = Key::from_key(key) else {
            return;
        };
        for binding in self.bindings_for(header) {
            controller::handle_key(self, &binding.widget, &binding.section, binding.policy, key);
        }
    }

    fn descendants(&self, node: usize) -> Vec<usize> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<usize> = nodes[node].children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(nodes[next].children.iter().rev().copied());
        }
        out
    }

    fn owning_widget(&self, node: usize) -> Option<usize> {
        let mut current = self.nodes.borrow()[node].parent;
        while let Some(candidate) = current {
            if self.has_class(&candidate, WIDGET_CLASS) {
                return Some(candidate);
            }
            current = self.nodes.borrow()[candidate].parent;
        }
        None
    }

    fn child_with_class(&self, node: usize, class: &str) -> Option<usize> {
        let children = self.nodes.borrow()[node].children.clone();
        children.into_iter().find(|child| self.has_class(child, class))
    }
}

impl Host for MemoryHost {
    type Node = usize;

    fn has_class(&self, node: &usize, class: &str) -> bool {
        self.nodes.borrow()[*node].classes.iter().any(|c| c == class)
    }

    fn set_class(&self, node: &usize, class: &str, on: bool) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[*node].classes;
        classes.retain(|c| c != class);
        if on {
            classes.push(class.to_string());
        }
    }

    fn attribute(&self, node: &usize, name: &str) -> Option<String> {
        self.nodes.borrow()[*node].attributes.get(name).cloned()
    }

    fn set_attribute(&self, node: &usize, name: &str, value: &str) {
        self.nodes.borrow_mut()[*node]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, node: &usize, name: &str) {
        self.nodes.borrow_mut()[*node].attributes.remove(name);
    }

    fn descendant_widgets(&self, node: &usize) -> Vec<usize> {
        self.descendants(*node)
            .into_iter()
            .filter(|n| self.has_class(n, WIDGET_CLASS))
            .collect()
    }

    fn sections(&self, widget: &usize) -> Vec<usize> {
        self.descendants(*widget)
            .into_iter()
            .filter(|n| self.has_class(n, SECTION_CLASS) && self.owning_widget(*n) == Some(*widget))
            .collect()
    }

    fn header(&self, section: &usize) -> Option<usize> {
        self.child_with_class(*section, HEADER_CLASS)
    }

    fn content(&self, section: &usize) -> Option<usize> {
        self.child_with_class(*section, CONTENT_CLASS)
    }

    fn focus(&self, node: &usize) {
        self.focused.set(Some(*node));
    }

    fn is_attached(&self, section: &Section<usize>) -> bool {
        self.attached.borrow().contains(&section.header)
    }

    fn mark_attached(&self, section: &Section<usize>) {
        self.attached.borrow_mut().insert(section.header);
    }

    fn bind(&self, widget: &usize, section: &Section<usize>, policy: Policy) {
        self.bindings.borrow_mut().push(Binding {
            widget: *widget,
            section: section.clone(),
            policy,
        });
    }
}
