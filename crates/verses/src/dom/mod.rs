// ABOUTME: Owned HTML node tree used by the verse transformer.
// ABOUTME: Defines Node/Element/Attribute plus parsing, serialization and attribute helpers.

//! DOM utilities for passage fragments.
//!
//! The parser hands back an arena tree; this module converts it into a plain
//! owned tree where each child list exclusively owns its nodes, so the
//! transformer can detach, regroup and reattach children without aliasing.

pub mod attrs;
pub mod parse;
pub mod serialize;

pub use parse::parse_fragment;
pub use serialize::{render, render_nodes};

/// A single attribute in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An element with its attributes and owned children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style attribute append, used for synthetic nodes.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(Attribute::new(key, value));
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Case-insensitive tag name check.
    pub fn is(&self, tag: &str) -> bool {
        self.name.eq_ignore_ascii_case(tag)
    }

    /// Iterate over every descendant element, depth-first, excluding self.
    pub fn descendant_elements(&self) -> Box<dyn Iterator<Item = &Element> + '_> {
        Box::new(
            self.children
                .iter()
                .filter_map(Node::as_element)
                .flat_map(|el| std::iter::once(el).chain(el.descendant_elements())),
        )
    }
}

/// A node in a passage fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}
