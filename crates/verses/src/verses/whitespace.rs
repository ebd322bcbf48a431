// ABOUTME: Whitespace trimming rules for verse text, markers and wrappers.
// ABOUTME: The cutset includes NBSP since the passage API pads verse numbers with it.

use crate::dom::{Element, Node};

/// Spaces, tabs, newlines and non-breaking spaces.
pub const CUTSET: &[char] = &[' ', '\t', '\n', '\r', '\u{a0}'];

pub fn trim_start_in_place(s: &mut String) {
    let cut = s.len() - s.trim_start_matches(CUTSET).len();
    s.drain(..cut);
}

pub fn trim_end_in_place(s: &mut String) {
    let keep = s.trim_end_matches(CUTSET).len();
    s.truncate(keep);
}

/// Text made only of cutset characters, or empty.
pub fn is_blank(s: &str) -> bool {
    s.trim_matches(CUTSET).is_empty()
}

/// Trim both ends of every direct text child.
pub fn trim_text_children(el: &mut Element) {
    for child in &mut el.children {
        if let Node::Text(text) = child {
            trim_start_in_place(text);
            trim_end_in_place(text);
        }
    }
}

/// Trim the leading edge of the first text child and the trailing edge of
/// the last, dropping text nodes that end up empty until a non-text child or
/// surviving text is reached on each side.
pub fn trim_children_whitespace(el: &mut Element) {
    while let Some(Node::Text(text)) = el.children.first_mut() {
        trim_start_in_place(text);
        if !text.is_empty() {
            break;
        }
        el.children.remove(0);
    }
    trim_trailing_whitespace(el);
}

/// Trim the trailing edge only.
pub fn trim_trailing_whitespace(el: &mut Element) {
    while let Some(Node::Text(text)) = el.children.last_mut() {
        trim_end_in_place(text);
        if !text.is_empty() {
            break;
        }
        el.children.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trim_in_place_handles_nbsp() {
        let mut s = "\u{a0}\u{a0} Praise the LORD!\n".to_string();
        trim_start_in_place(&mut s);
        assert_eq!(s, "Praise the LORD!\n");
        trim_end_in_place(&mut s);
        assert_eq!(s, "Praise the LORD!");
    }

    #[test]
    fn test_trim_children_whitespace_drops_blank_edges() {
        let mut p = Element::new("p")
            .with_child(Node::text("\n"))
            .with_child(Node::text("  first"))
            .with_child(Element::new("br").into())
            .with_child(Node::text("last  "))
            .with_child(Node::text("\u{a0}\n"));
        trim_children_whitespace(&mut p);
        assert_eq!(
            p.children,
            vec![
                Node::text("first"),
                Element::new("br").into(),
                Node::text("last"),
            ]
        );
    }

    #[test]
    fn test_trim_children_whitespace_all_blank() {
        let mut span = Element::new("span")
            .with_child(Node::text(" "))
            .with_child(Node::text("\n"));
        trim_children_whitespace(&mut span);
        assert!(span.children.is_empty());
    }

    #[test]
    fn test_trim_trailing_leaves_leading() {
        let mut w = Element::new("span")
            .with_child(Node::text(" a "))
            .with_child(Node::text(" "));
        trim_trailing_whitespace(&mut w);
        assert_eq!(w.children, vec![Node::text(" a")]);
    }

    #[test]
    fn test_is_blank_uses_cutset() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r\n\u{a0}"));
        assert!(!is_blank("\u{2003}"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_trim_text_children() {
        let mut b = Element::new("b").with_child(Node::text("150:1\u{a0}"));
        trim_text_children(&mut b);
        assert_eq!(b.children, vec![Node::text("150:1")]);
    }
}
