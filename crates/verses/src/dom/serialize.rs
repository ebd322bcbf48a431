// ABOUTME: Renders the owned node tree back to an HTML string.
// ABOUTME: Escaping mirrors the passage backend's renderer; NBSP form is configurable.

use std::fmt::Write;

use super::{Element, Node};
use crate::error::TransformError;
use crate::options::NbspStyle;

/// Render a sequence of sibling nodes.
pub fn render_nodes(nodes: &[Node], nbsp: NbspStyle) -> Result<String, TransformError> {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node, nbsp)?;
    }
    Ok(out)
}

/// Render one node and its subtree.
pub fn render(node: &Node, nbsp: NbspStyle) -> Result<String, TransformError> {
    let mut out = String::new();
    write_node(&mut out, node, nbsp)?;
    Ok(out)
}

fn write_node<W: Write>(out: &mut W, node: &Node, nbsp: NbspStyle) -> Result<(), TransformError> {
    match node {
        Node::Text(text) => write_escaped(out, text, nbsp)?,
        Node::Comment(comment) => write!(out, "<!--{}-->", comment)?,
        Node::Element(el) => write_element(out, el, nbsp)?,
    }
    Ok(())
}

fn write_element<W: Write>(
    out: &mut W,
    el: &Element,
    nbsp: NbspStyle,
) -> Result<(), TransformError> {
    out.write_char('<')?;
    out.write_str(&el.name)?;
    for attr in &el.attrs {
        write!(out, " {}=\"", attr.key)?;
        write_escaped(out, &attr.value, nbsp)?;
        out.write_char('"')?;
    }

    if is_void_element(&el.name) {
        out.write_str("/>")?;
        return Ok(());
    }
    out.write_char('>')?;

    let raw = is_raw_text_element(&el.name);
    for child in &el.children {
        match child {
            Node::Text(text) if raw => out.write_str(text)?,
            _ => write_node(out, child, nbsp)?,
        }
    }

    write!(out, "</{}>", el.name)?;
    Ok(())
}

fn write_escaped<W: Write>(out: &mut W, s: &str, nbsp: NbspStyle) -> std::fmt::Result {
    for c in s.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '\'' => out.write_str("&#39;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&#34;")?,
            '\r' => out.write_str("&#13;")?,
            '\u{a0}' if nbsp == NbspStyle::Entity => out.write_str("&nbsp;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

/// Check if tag is void element
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag.to_lowercase().as_str(),
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn is_raw_text_element(tag: &str) -> bool {
    matches!(
        tag.to_lowercase().as_str(),
        "iframe" | "noembed" | "noframes" | "plaintext" | "script" | "style" | "xmp"
    )
}
