// ABOUTME: The verse tree transformer: wraps or tags every verse's content in place.
// ABOUTME: Recursive, depth-first; the active verse is passed into and returned from each call.

//! Verse restructuring for passage fragments.
//!
//! The walk rebuilds each element's child list from scratch. Prose content is
//! grouped under synthetic `span.verse[data-ref]` wrappers, one per verse per
//! block container. Poetic lines (`span.line`) are tagged in place instead of
//! wrapped, so their indentation styling keeps applying to the same element.
//! Line-group marker runs are folded into `section.line-group` first.

pub mod line_group;
pub mod markers;
pub mod whitespace;

use crate::dom::{Element, Node};

use self::line_group::fold_line_groups;
use self::markers::{
    cleanup_attributes, has_line_group, is_block, is_copyright, is_copyright_link,
    is_empty_paragraph, is_line_group, is_poetic_line, is_verse_number, tag_verse, verse_ref,
    verse_wrapper,
};
use self::whitespace::{
    is_blank, trim_children_whitespace, trim_start_in_place, trim_text_children,
    trim_trailing_whitespace,
};

/// Transform a parsed fragment's top-level nodes.
///
/// The active verse is threaded across siblings, so a verse that starts in
/// one paragraph keeps tagging content in the next.
pub fn process_fragment(nodes: Vec<Node>) -> Vec<Node> {
    let mut active_ref = String::new();
    let mut out = Vec::with_capacity(nodes.len());

    for mut node in fold_line_groups(nodes) {
        active_ref = process_node(&mut node, active_ref);

        match node {
            Node::Element(el) if el.is("p") && has_line_group(&el) => out.extend(el.children),
            Node::Element(el) if is_empty_paragraph(&el) => {}
            other => out.push(other),
        }
    }

    out
}

/// Process one node, returning the active verse after it.
///
/// Text and comment nodes are leaves and leave the state untouched.
pub fn process_node(node: &mut Node, active_ref: String) -> String {
    match node {
        Node::Element(el) => process_element(el, active_ref, false),
        _ => active_ref,
    }
}

/// Where the rebuilt children go while one element is being walked.
#[derive(Debug, Default)]
struct Rebuild {
    children: Vec<Node>,
    wrapper: Option<Element>,
}

impl Rebuild {
    fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Put `node` into the open wrapper, opening one for `reference` if needed.
    fn wrap(&mut self, reference: &str, node: Node) {
        self.wrapper
            .get_or_insert_with(|| verse_wrapper(reference))
            .children
            .push(node);
    }

    /// Start a new wrapper with `marker` as its first child.
    fn open(&mut self, reference: &str, marker: Element) {
        let mut wrapper = verse_wrapper(reference);
        wrapper.children.push(Node::Element(marker));
        self.wrapper = Some(wrapper);
    }

    /// Emit the open wrapper, if any. Wrappers left with nothing but
    /// whitespace are discarded.
    fn close(&mut self, trim_trailing: bool) {
        let Some(mut wrapper) = self.wrapper.take() else {
            return;
        };
        if trim_trailing {
            trim_trailing_whitespace(&mut wrapper);
        }
        let blank = wrapper
            .children
            .iter()
            .all(|c| matches!(c, Node::Text(t) if is_blank(t)));
        if !blank {
            self.children.push(Node::Element(wrapper));
        }
    }
}

/// `covered` is set when the caller has already placed `el` inside a wrapper
/// or a tagged line, so its own content must not be wrapped a second time.
fn process_element(el: &mut Element, mut active_ref: String, covered: bool) -> String {
    cleanup_attributes(el);
    if is_verse_number(el) {
        trim_text_children(el);
    }

    let children = std::mem::take(&mut el.children);

    // Copyright text belongs to no verse, including whatever precedes the link.
    if children.iter().any(is_copyright_link) {
        active_ref.clear();
    }

    let children = fold_line_groups(children);

    let in_line = is_poetic_line(el);
    let in_line_group = is_line_group(el);
    let in_block = is_block(el);
    let mut covered = covered || in_line;

    let mut out = Rebuild::default();
    let mut trim_leading = false;

    for child in children {
        match child {
            Node::Element(mut child_el) => {
                // Marker detection precedes any attribute cleanup of the child.
                if let Some(reference) = verse_ref(&child_el) {
                    out.close(true);
                    active_ref = reference;
                    trim_leading = true;
                    clean_verse_marker(&mut child_el);

                    if in_line {
                        tag_verse(el, &active_ref);
                        out.push(Node::Element(child_el));
                    } else {
                        out.open(&active_ref, child_el);
                        covered = false;
                    }
                    continue;
                }

                if is_copyright(&child_el) {
                    out.close(true);
                    active_ref.clear();
                    out.push(Node::Element(child_el));
                    continue;
                }

                if is_block(&child_el) {
                    out.close(false);
                    active_ref = process_element(&mut child_el, active_ref, false);
                    trim_leading = false;

                    if child_el.is("p") && has_line_group(&child_el) {
                        out.children.extend(child_el.children);
                    } else if !is_empty_paragraph(&child_el) {
                        out.push(Node::Element(child_el));
                    }
                    continue;
                }

                if child_el.is("br") {
                    out.close(true);
                    out.push(Node::Element(child_el));
                    trim_leading = false;
                    continue;
                }

                if is_poetic_line(&child_el) {
                    out.close(true);
                    active_ref = process_element(&mut child_el, active_ref, false);
                    if !active_ref.is_empty() {
                        tag_verse(&mut child_el, &active_ref);
                    }
                    out.push(Node::Element(child_el));
                    trim_leading = false;
                    continue;
                }

                // Opaque inline element: leading trim can't reach inside it.
                trim_leading = false;

                if !active_ref.is_empty() && !covered {
                    let governing = active_ref.clone();
                    active_ref = process_element(&mut child_el, active_ref, true);
                    if is_empty_paragraph(&child_el) {
                        continue;
                    }
                    out.wrap(&governing, Node::Element(child_el));
                    if active_ref != governing {
                        out.close(true);
                    }
                } else {
                    active_ref = process_element(&mut child_el, active_ref, covered);
                    if is_empty_paragraph(&child_el) {
                        continue;
                    }
                    out.push(Node::Element(child_el));
                }
            }
            Node::Text(mut text) => {
                if trim_leading {
                    trim_start_in_place(&mut text);
                    if text.is_empty() {
                        continue;
                    }
                    trim_leading = false;
                }

                if in_line_group && is_blank(&text) {
                    out.push(Node::Text(text));
                    continue;
                }

                if !active_ref.is_empty() && !covered {
                    out.wrap(&active_ref, Node::Text(text));
                } else {
                    out.push(Node::Text(text));
                }
            }
            comment => match out.wrapper.as_mut() {
                Some(wrapper) => wrapper.children.push(comment),
                None => out.push(comment),
            },
        }
    }
    out.close(in_block);

    el.children = out.children;

    if el.is("p") || el.is("span") {
        trim_children_whitespace(el);
    }

    active_ref
}

/// Strip the marker's id (the reference now lives on a wrapper or line) and
/// the padding around its number.
fn clean_verse_marker(marker: &mut Element) {
    marker.remove_attr("id");
    cleanup_attributes(marker);
    trim_children_whitespace(marker);
}
