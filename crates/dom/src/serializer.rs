//! HTML Serializer - Render the document forest to markup
//!
//! Output is a single unbroken string: no indentation, no newlines, no
//! escaping. Malformed or absent shapes degrade to empty output, so
//! serialization never fails.

use serde::{Deserialize, Serialize};

use crate::types::{Attributes, Content, Node};

/// Document-type declaration that opens every full document
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Rendering options for a whole document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Emit only the concatenated forest, without prologue or `<html>` wrapper
    pub exclude_root_wrapper: bool,
}

/// Forest serializer
#[derive(Debug, Clone, Default)]
pub struct HtmlSerializer {
    options: RenderOptions,
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the forest according to the configured options
    pub fn render(&self, nodes: &[Node]) -> String {
        if self.options.exclude_root_wrapper {
            serialize(nodes)
        } else {
            serialize_document(nodes)
        }
    }
}

/// Serialize a sequence of nodes, in order
pub fn serialize(nodes: &[Node]) -> String {
    let mut output = String::with_capacity(nodes.len() * 32);
    write_nodes(nodes, &mut output);
    output
}

/// Serialize a forest as a full document: prologue plus `<html>` wrapper
pub fn serialize_document(nodes: &[Node]) -> String {
    let mut output = String::with_capacity(64 + nodes.len() * 32);
    output.push_str(DOCTYPE);
    output.push_str("<html>");
    write_nodes(nodes, &mut output);
    output.push_str("</html>");
    output
}

/// Serialize a single node recursively
pub fn serialize_node(node: &Node, output: &mut String) {
    let Some(tag) = node.tag.as_deref() else {
        // Bare fragment: raw content, no markup
        write_content(&node.content, output);
        return;
    };

    output.push('<');
    output.push_str(tag);
    write_attributes(&node.attributes, output);
    if let Some(suffix) = &node.raw_suffix {
        output.push_str(suffix);
    }
    output.push('>');

    write_content(&node.content, output);

    output.push_str("</");
    output.push_str(tag);
    output.push('>');
}

fn write_nodes(nodes: &[Node], output: &mut String) {
    for node in nodes {
        serialize_node(node, output);
    }
}

fn write_content(content: &Content, output: &mut String) {
    match content {
        Content::NoContent => {}
        Content::Text(text) => output.push_str(text),
        Content::Children(children) => write_nodes(children, output),
    }
}

/// Format: ` data-foo="bar"` per attribute, in map order. Values are not escaped.
fn write_attributes(attributes: &Attributes, output: &mut String) {
    for (name, value) in attributes {
        output.push(' ');
        output.push_str(&kebab_case(name));
        output.push_str("=\"");
        output.push_str(&value.to_string());
        output.push('"');
    }
}

/// `dataFoo` → `data-foo`: every ASCII uppercase letter becomes `-` plus its lowercase
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
