// ABOUTME: Fragment parsing on top of scraper's html5ever tree.
// ABOUTME: Converts the ego_tree arena into the owned Node tree the transformer edits.

use scraper::Html;

use super::{Attribute, Element, Node};
use crate::error::TransformError;

/// Parse an HTML fragment under an implicit `<body>` context.
///
/// With `strict` set, any recoverable error the HTML parser reports is
/// treated as fatal.
pub fn parse_fragment(html: &str, strict: bool) -> Result<Vec<Node>, TransformError> {
    let fragment = Html::parse_fragment(html);

    if strict && !fragment.errors.is_empty() {
        let details = fragment.errors.join("; ");
        tracing::warn!(errors = fragment.errors.len(), %details, "rejecting fragment");
        return Err(TransformError::parse(details));
    }

    // html5ever places fragment content under a synthetic <html> element.
    let root = fragment
        .tree
        .root()
        .children()
        .find(|n| n.value().is_element())
        .ok_or_else(|| TransformError::parse("fragment has no root element"))?;

    Ok(root.children().filter_map(convert).collect())
}

fn convert(node: ego_tree::NodeRef<scraper::Node>) -> Option<Node> {
    match node.value() {
        scraper::Node::Text(text) => Some(Node::Text((**text).to_string())),
        scraper::Node::Comment(comment) => Some(Node::Comment((**comment).to_string())),
        scraper::Node::Element(el) => Some(Node::Element(Element {
            name: el.name().to_string(),
            attrs: el
                .attrs()
                .map(|(key, value)| Attribute::new(key, value))
                .collect(),
            children: node.children().filter_map(convert).collect(),
        })),
        _ => None,
    }
}
