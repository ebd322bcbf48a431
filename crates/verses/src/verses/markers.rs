// ABOUTME: Classifiers for the passage markup vocabulary (verse markers, lines, line-groups, copyright).
// ABOUTME: Also holds the attribute cleanup applied to every element the walker visits.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dom::{Element, Node};

pub const VERSE_CLASS: &str = "verse";
pub const DATA_REF: &str = "data-ref";
pub const LINE_GROUP_CLASS: &str = "line-group";

// Matches ids like "v01002017-1" and captures "01002017".
static VERSE_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^v([0-9]{8})").unwrap());

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// The 8-digit reference encoded in the element's `id`, if any.
pub fn verse_ref(el: &Element) -> Option<String> {
    el.attrs
        .iter()
        .filter(|a| a.key == "id")
        .find_map(|a| VERSE_ID_RE.captures(&a.value))
        .map(|caps| caps[1].to_string())
}

/// Block-level containers that break verse wrappers.
pub fn is_block(el: &Element) -> bool {
    el.is("p") || el.is("div") || el.is("section") || is_heading(el)
}

pub fn is_heading(el: &Element) -> bool {
    HEADING_TAGS.iter().any(|tag| el.is(tag))
}

/// A poetic line: `span.line`, including the `indent line` variant.
pub fn is_poetic_line(el: &Element) -> bool {
    el.is("span") && el.has_class("line")
}

pub fn is_begin_line_group(node: &Node) -> bool {
    matches!(node, Node::Element(el) if el.is("span") && el.has_class("begin-line-group"))
}

pub fn is_end_line_group(node: &Node) -> bool {
    matches!(node, Node::Element(el) if el.is("span") && el.has_class("end-line-group"))
}

pub fn is_line_group(el: &Element) -> bool {
    el.is("section") && el.has_class(LINE_GROUP_CLASS)
}

pub fn is_copyright_link(node: &Node) -> bool {
    matches!(node, Node::Element(el) if is_copyright(el))
}

/// `a.copyright`, the attribution link closing a passage.
pub fn is_copyright(el: &Element) -> bool {
    el.is("a") && el.has_class("copyright")
}

/// `b.verse-num` / `b.chapter-num`, the visible number inside a marker.
pub fn is_verse_number(el: &Element) -> bool {
    el.is("b") && (el.has_class("verse-num") || el.has_class("chapter-num"))
}

/// True if a line-group section sits anywhere below `el`.
pub fn has_line_group(el: &Element) -> bool {
    el.descendant_elements().any(is_line_group)
}

/// An empty `<p></p>` left behind once its content migrated elsewhere.
pub fn is_empty_paragraph(el: &Element) -> bool {
    el.is("p") && el.children.is_empty()
}

/// Remove API artifacts: ids on paragraphs, bold and headings, and the
/// `virtual` class on paragraphs.
pub fn cleanup_attributes(el: &mut Element) {
    if el.is("p") {
        el.remove_attr("id");
        el.remove_class("virtual");
    } else if el.is("b") || is_heading(el) {
        el.remove_attr("id");
    }
}

/// Tag an existing element as belonging to `reference`.
pub fn tag_verse(el: &mut Element, reference: &str) {
    el.add_class(VERSE_CLASS);
    el.set_attr(DATA_REF, reference);
}

/// A fresh `span.verse[data-ref]` wrapper.
pub fn verse_wrapper(reference: &str) -> Element {
    Element::new("span")
        .with_attr("class", VERSE_CLASS)
        .with_attr(DATA_REF, reference)
}

/// A fresh `section.line-group`.
pub fn line_group_section() -> Element {
    Element::new("section").with_attr("class", LINE_GROUP_CLASS)
}
