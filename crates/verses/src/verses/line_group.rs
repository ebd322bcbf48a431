// ABOUTME: Folds begin/end line-group marker runs into nested section.line-group elements.
// ABOUTME: Markers themselves are discarded; the section takes the begin marker's position.

use super::markers::{is_begin_line_group, is_end_line_group, line_group_section};
use crate::dom::{Element, Node};

/// Regroup a flat sibling list so every begin/content/end run becomes one
/// section. A begin inside an open group starts a new group; an end with no
/// open group is dropped; an unterminated group runs to the end of the list.
pub fn fold_line_groups(children: Vec<Node>) -> Vec<Node> {
    if !children.iter().any(|c| is_begin_line_group(c) || is_end_line_group(c)) {
        return children;
    }

    let mut grouped = Vec::with_capacity(children.len());
    let mut section: Option<Element> = None;

    for child in children {
        if is_begin_line_group(&child) {
            if let Some(open) = section.replace(line_group_section()) {
                grouped.push(Node::Element(open));
            }
            continue;
        }
        if is_end_line_group(&child) {
            if let Some(open) = section.take() {
                grouped.push(Node::Element(open));
            }
            continue;
        }
        match section.as_mut() {
            Some(open) => open.children.push(child),
            None => grouped.push(child),
        }
    }

    if let Some(open) = section {
        grouped.push(Node::Element(open));
    }

    grouped
}
