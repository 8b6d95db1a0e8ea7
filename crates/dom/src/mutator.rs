//! Mutator - Merge new content into located targets
//!
//! Whatever shape a target's content has, it ends up as a child sequence
//! with the new data appended last:
//!
//! ```text
//! NoContent      → [data..]
//! Text(old)      → [{content: old}, data..]
//! Children(xs)   → [xs.., data..]
//! ```

use crate::error::{DomError, Result};
use crate::locator::{self, Matches, Selector};
use crate::types::{Content, Node};

/// New content for a target: one node, or a sequence spliced in order
#[derive(Debug, Clone, PartialEq)]
pub enum Insertion {
    One(Node),
    Many(Vec<Node>),
}

impl Insertion {
    pub(crate) fn len(&self) -> usize {
        match self {
            Insertion::One(_) => 1,
            Insertion::Many(nodes) => nodes.len(),
        }
    }
}

impl From<Node> for Insertion {
    fn from(node: Node) -> Self {
        Insertion::One(node)
    }
}

impl From<Vec<Node>> for Insertion {
    fn from(nodes: Vec<Node>) -> Self {
        Insertion::Many(nodes)
    }
}

/// Push a single node, or concatenate a sequence, onto `target`
pub fn push_or_concat(target: &mut Vec<Node>, data: Insertion) {
    match data {
        Insertion::One(node) => target.push(node),
        Insertion::Many(nodes) => target.extend(nodes),
    }
}

/// Reconcile existing content with new data into a child sequence
pub fn reconcile(existing: Content, data: Insertion) -> Content {
    let mut children = match existing {
        Content::Children(children) => children,
        // Old text survives as the first child
        Content::Text(text) if !text.is_empty() => vec![Node::text(text)],
        Content::Text(_) | Content::NoContent => Vec::new(),
    };
    push_or_concat(&mut children, data);
    Content::Children(children)
}

/// Merge `data` into a single target node
pub fn insert(target: &mut Node, data: Insertion) {
    let existing = std::mem::take(&mut target.content);
    target.content = reconcile(existing, data);
}

/// Locate `selector` in the forest and merge `data` into every match.
///
/// Each matched node receives its own copy of `data`. Matches are
/// applied in search order; appending never shifts the index of an
/// existing node, so every located path stays valid.
///
/// Returns the number of targets updated, or `TargetNotFound`.
pub fn insert_at_target(nodes: &mut [Node], selector: &Selector, data: Insertion) -> Result<usize> {
    match Matches::from_vec(locator::locate(nodes, selector)) {
        Matches::NotFound => Err(DomError::TargetNotFound(selector.clone())),
        Matches::One(path) => {
            let target = locator::node_at_mut(nodes, &path)
                .ok_or_else(|| DomError::TargetNotFound(selector.clone()))?;
            insert(target, data);
            Ok(1)
        }
        Matches::Many(paths) => {
            let mut updated = 0;
            for path in &paths {
                if let Some(target) = locator::node_at_mut(nodes, path) {
                    insert(target, data.clone());
                    updated += 1;
                }
            }
            tracing::debug!("Inserted {} node(s) into {} targets ({})", data.len(), updated, selector);
            Ok(updated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_into_text_keeps_old_text_first() {
        let mut target = Node::element("p").with_content("hello");
        insert(&mut target, Node::element("span").into());

        assert_eq!(
            target.content,
            Content::Children(vec![Node::text("hello"), Node::element("span")])
        );
    }

    #[test]
    fn test_insert_into_empty_target() {
        let mut target = Node::element("div");
        insert(&mut target, Node::element("hr").into());

        assert_eq!(target.content, Content::Children(vec![Node::element("hr")]));
    }

    #[test]
    fn test_insert_into_empty_text_drops_it() {
        let mut target = Node::element("div").with_content("");
        insert(&mut target, Node::element("hr").into());

        assert_eq!(target.content, Content::Children(vec![Node::element("hr")]));
    }

    #[test]
    fn test_insert_sequence_is_concatenated() {
        let mut target = Node::element("ul").with_content(vec![Node::element("li")]);
        insert(
            &mut target,
            vec![Node::element("li").with_content("2"), Node::element("li").with_content("3")].into(),
        );

        let children = target.children().unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(children[2].content.text(), Some("3"));
    }

    #[test]
    fn test_insert_at_target_not_found() {
        let mut nodes = vec![Node::element("body")];
        let err = insert_at_target(&mut nodes, &Selector::id("missing"), Node::text("x").into())
            .unwrap_err();

        assert!(matches!(err, DomError::TargetNotFound(Selector::Id(ref id)) if id == "missing"));
        assert_eq!(nodes, vec![Node::element("body")]);
    }

    #[test]
    fn test_insert_at_every_match() {
        let mut nodes: Vec<Node> = serde_json::from_value(json!([
            { "type": "div", "attributes": { "class": "box" }, "content": [
                { "type": "div", "attributes": { "class": "box" }, "content": "inner" }
            ]},
            { "type": "div", "attributes": { "class": "box" } }
        ]))
        .unwrap();

        let updated =
            insert_at_target(&mut nodes, &Selector::class("box"), Node::element("i").into()).unwrap();
        assert_eq!(updated, 3);

        // Outer box: existing inner box stays first, new node appended
        let outer = nodes[0].children().unwrap();
        assert_eq!(outer.len(), 2);
        assert_eq!(outer[1], Node::element("i"));

        // Inner box: text wrapped, then new node
        assert_eq!(
            outer[0].content,
            Content::Children(vec![Node::text("inner"), Node::element("i")])
        );

        assert_eq!(nodes[1].content, Content::Children(vec![Node::element("i")]));
    }
}
