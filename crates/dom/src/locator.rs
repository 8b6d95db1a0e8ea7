//! Locator - Deep search of the forest by tag, id or class
//!
//! Search order per level: every match at the current level first, then,
//! for each node with child content, the matches found below it. All
//! matches across all depths are collected into one flat sequence.
//!
//! Matches are addressed by index paths so the same search drives both
//! shared lookups and in-place mutation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Content, Node};

/// Search predicate. Exactly one kind is active per search.
///
/// Deserializes from a target descriptor: `{"id": "x"}`,
/// `{"class": "c"}` or `{"type": "p"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selector {
    #[serde(rename = "type", alias = "tag")]
    Tag(String),
    Id(String),
    Class(String),
}

impl Selector {
    pub fn tag(tag: impl Into<String>) -> Self {
        Selector::Tag(tag.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Selector::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Selector::Class(class.into())
    }

    /// The value searched for
    pub fn needle(&self) -> &str {
        match self {
            Selector::Tag(needle) | Selector::Id(needle) | Selector::Class(needle) => needle,
        }
    }

    /// Check a single node, ignoring its descendants.
    ///
    /// An empty needle matches nothing.
    pub fn matches(&self, node: &Node) -> bool {
        if self.needle().is_empty() {
            return false;
        }
        match self {
            Selector::Tag(tag) => node.tag_name() == Some(tag.as_str()),
            Selector::Id(id) => node.id() == Some(id.as_str()),
            Selector::Class(class) => node.class() == Some(class.as_str()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Tag(tag) => write!(f, "type={:?}", tag),
            Selector::Id(id) => write!(f, "id={:?}", id),
            Selector::Class(class) => write!(f, "class={:?}", class),
        }
    }
}

/// Position of a node: child index at each depth, starting at the forest
pub type NodePath = Vec<usize>;

/// Search result, collapsed by cardinality
#[derive(Debug, Clone, PartialEq)]
pub enum Matches<T> {
    NotFound,
    One(T),
    Many(Vec<T>),
}

/// Shared lookup result
pub type Found<'a> = Matches<&'a Node>;

impl<T> Matches<T> {
    /// Collapse a flat match list: empty → `NotFound`, single → `One`
    pub fn from_vec(mut items: Vec<T>) -> Self {
        match items.len() {
            0 => Matches::NotFound,
            1 => items.pop().map_or(Matches::NotFound, Matches::One),
            _ => Matches::Many(items),
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Matches::NotFound)
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Matches::NotFound => &[],
            Matches::One(item) => std::slice::from_ref(item),
            Matches::Many(items) => items,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Matches::NotFound => Vec::new(),
            Matches::One(item) => vec![item],
            Matches::Many(items) => items,
        }
    }
}

/// Find every node matching `selector`, collapsed by cardinality
pub fn find<'a>(nodes: &'a [Node], selector: &Selector) -> Found<'a> {
    let found = locate(nodes, selector)
        .iter()
        .filter_map(|path| node_at(nodes, path))
        .collect();
    Matches::from_vec(found)
}

/// Paths of every node matching `selector`, in search order
pub fn locate(nodes: &[Node], selector: &Selector) -> Vec<NodePath> {
    let mut out = Vec::new();
    let mut prefix = Vec::new();
    collect_paths(nodes, selector, &mut prefix, &mut out);
    out
}

fn collect_paths(
    nodes: &[Node],
    selector: &Selector,
    prefix: &mut Vec<usize>,
    out: &mut Vec<NodePath>,
) {
    // This level first
    for (index, node) in nodes.iter().enumerate() {
        if selector.matches(node) {
            let mut path = prefix.clone();
            path.push(index);
            out.push(path);
        }
    }

    // Then each child sequence, in order
    for (index, node) in nodes.iter().enumerate() {
        if let Content::Children(children) = &node.content {
            prefix.push(index);
            collect_paths(children, selector, prefix, out);
            prefix.pop();
        }
    }
}

/// Resolve a path against the forest
pub fn node_at<'a>(nodes: &'a [Node], path: &[usize]) -> Option<&'a Node> {
    let (&first, rest) = path.split_first()?;
    let node = nodes.get(first)?;
    if rest.is_empty() {
        return Some(node);
    }
    match &node.content {
        Content::Children(children) => node_at(children, rest),
        _ => None,
    }
}

/// Resolve a path against the forest (mutable)
pub fn node_at_mut<'a>(nodes: &'a mut [Node], path: &[usize]) -> Option<&'a mut Node> {
    let (&first, rest) = path.split_first()?;
    let node = nodes.get_mut(first)?;
    if rest.is_empty() {
        return Some(node);
    }
    match &mut node.content {
        Content::Children(children) => node_at_mut(children, rest),
        _ => None,
    }
}
