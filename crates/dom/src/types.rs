//! Core type definitions for the document forest
//!
//! Key design principles:
//! 1. Content shape is an explicit three-way variant, never sniffed at runtime
//! 2. Attributes keep insertion order so output is deterministic
//! 3. Nodes own their children; nothing points back up the tree

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Attribute name → value, in insertion order
pub type Attributes = IndexMap<String, AttrValue>;

/// Attribute value: a string or a JSON-like primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl AttrValue {
    /// Borrow the value if it is textual
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => f.write_str("null"),
            AttrValue::Bool(value) => write!(f, "{}", value),
            AttrValue::Number(value) => write!(f, "{}", value),
            AttrValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<u64> for AttrValue {
    fn from(value: u64) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        // NaN and infinities have no JSON number form
        match serde_json::Number::from_f64(value) {
            Some(number) => AttrValue::Number(number),
            None => AttrValue::Text(value.to_string()),
        }
    }
}

/// Content shape of a node
///
/// In JSON descriptors: `null`/missing → `NoContent`, a string → `Text`,
/// a number or boolean → `Text` of its literal form, an array of nodes →
/// `Children`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    #[default]
    NoContent,
    Text(String),
    Children(Vec<Node>),
}

/// Every shape a descriptor's `content` may take on the wire
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentRepr {
    Empty,
    Text(String),
    Bool(bool),
    Number(serde_json::Number),
    Children(Vec<Node>),
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ContentRepr::deserialize(deserializer)? {
            ContentRepr::Empty => Content::NoContent,
            ContentRepr::Text(text) => Content::Text(text),
            ContentRepr::Bool(value) => Content::Text(value.to_string()),
            ContentRepr::Number(value) => Content::Text(value.to_string()),
            ContentRepr::Children(children) => Content::Children(children),
        })
    }
}

impl Content {
    pub fn is_none(&self) -> bool {
        matches!(self, Content::NoContent)
    }

    /// Child sequence, if this content has one
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Vec<Node>> for Content {
    fn from(children: Vec<Node>) -> Self {
        Content::Children(children)
    }
}

impl From<Node> for Content {
    fn from(child: Node) -> Self {
        Content::Children(vec![child])
    }
}

/// One element of the document forest
///
/// Pure data. A node without a tag is a bare content fragment and renders
/// without any wrapping markup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Element type, e.g. `div`
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: Attributes,

    #[serde(default, skip_serializing_if = "Content::is_none")]
    pub content: Content,

    /// Injected verbatim into the opening tag, right before `>`
    #[serde(
        default,
        alias = "customTagContent",
        skip_serializing_if = "Option::is_none"
    )]
    pub raw_suffix: Option<String>,
}

impl Node {
    /// Create an empty element with the given tag
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    /// Create a bare text fragment (no tag)
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<Content>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_raw_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.raw_suffix = Some(suffix.into());
        self
    }

    /// Append a child, reconciling whatever content the node already has
    pub fn with_child(mut self, child: Node) -> Self {
        crate::mutator::insert(&mut self, child.into());
        self
    }

    /// Tag name, if this is an element
    pub fn tag_name(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Get attribute value
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id").and_then(AttrValue::as_str)
    }

    pub fn class(&self) -> Option<&str> {
        self.attr("class").and_then(AttrValue::as_str)
    }

    pub fn children(&self) -> Option<&[Node]> {
        self.content.children()
    }

    /// Check if node is a bare content fragment
    pub fn is_fragment(&self) -> bool {
        self.tag.is_none()
    }
}
