use crate::state::Policy;

/// A section whose header and content were both found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<N> {
    pub root: N,
    pub header: N,
    pub content: N,
}

/// The document the controller runs against.
///
/// Methods take `&self` because document nodes are shared and mutated in
/// place. Implementations answer structural queries using the class names in
/// [`crate::markers`]; the controller never inspects node types.
pub trait Host {
    type Node: Clone + PartialEq;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn set_class(&self, node: &Self::Node, class: &str, on: bool);
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&self, node: &Self::Node, name: &str);

    /// Widget roots strictly below `node`, in document order.
    fn descendant_widgets(&self, node: &Self::Node) -> Vec<Self::Node>;
    /// Sections owned by `widget`, in document order. Sections of nested
    /// widgets are excluded.
    fn sections(&self, widget: &Self::Node) -> Vec<Self::Node>;
    fn header(&self, section: &Self::Node) -> Option<Self::Node>;
    fn content(&self, section: &Self::Node) -> Option<Self::Node>;

    fn focus(&self, node: &Self::Node);

    /// Whether handlers were bound to this section's header by this host.
    ///
    /// Must not be derived from markup: a copy of an attached section carries
    /// its attributes but none of its handlers.
    fn is_attached(&self, section: &Section<Self::Node>) -> bool;
    fn mark_attached(&self, section: &Section<Self::Node>);

    /// Registers one click and one keydown handler on `section.header`.
    ///
    /// Handlers call [`crate::activate`] on click and [`crate::handle_key`]
    /// for every recognized [`Key`](crate::keyboard::Key). The controller
    /// only binds sections for which [`Host::is_attached`] is false.
    fn bind(&self, widget: &Self::Node, section: &Section<Self::Node>, policy: Policy);
}
