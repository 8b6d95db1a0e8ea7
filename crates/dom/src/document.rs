//! Document - Owns the root forest and orchestrates search and mutation
//!
//! A document is a forest: the root sequence has no implicit single root.
//! Every mutation happens in place.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::error::{DomError, Result};
use crate::locator::{self, Found, Matches, Selector};
use crate::mutator::{self, Insertion};
use crate::report::{Reporter, Severity, TracingReporter};
use crate::serializer::{self, RenderOptions};
use crate::types::{Content, Node};

/// Viewport declaration used by the boilerplate skeleton
pub const VIEWPORT: &str = "width=device-width, initial-scale=1, shrink-to-fit=no";

#[derive(Clone)]
pub struct Document {
    content: Vec<Node>,
    reporter: Arc<dyn Reporter>,
}

impl Document {
    /// Create an empty document reporting through `tracing`
    pub fn new() -> Self {
        Self::with_reporter(Arc::new(TracingReporter))
    }

    /// Create an empty document with a custom diagnostic sink
    pub fn with_reporter(reporter: Arc<dyn Reporter>) -> Self {
        Self {
            content: Vec::new(),
            reporter,
        }
    }

    pub fn with_content(content: Vec<Node>) -> Self {
        let mut document = Self::new();
        document.set_content(content);
        document
    }

    /// Build from a dynamic value.
    ///
    /// Anything other than an array of node descriptors is reported and
    /// leaves the document empty.
    pub fn from_json(value: &Value, reporter: Arc<dyn Reporter>) -> Self {
        let mut document = Self::with_reporter(reporter);
        document.set_content_json(value);
        document
    }

    pub fn content(&self) -> &[Node] {
        &self.content
    }

    /// Replace the root forest
    pub fn set_content(&mut self, content: Vec<Node>) -> &mut Self {
        self.content = content;
        self
    }

    /// Replace the root forest from a dynamic value.
    ///
    /// Soft failure: on a non-array or unreadable value the error is
    /// reported, prior content is kept, and `false` is returned.
    pub fn set_content_json(&mut self, value: &Value) -> bool {
        match parse_forest(value) {
            Ok(content) => {
                self.content = content;
                true
            }
            Err(e) => {
                self.reporter.report(Severity::Error, &e.to_string());
                false
            }
        }
    }

    /// Forest markup only, without prologue or `<html>` wrapper
    pub fn content_html(&self) -> String {
        serializer::serialize(&self.content)
    }

    /// Full document markup
    pub fn html(&self) -> String {
        serializer::serialize_document(&self.content)
    }

    pub fn render(&self, options: RenderOptions) -> String {
        serializer::HtmlSerializer::with_options(options).render(&self.content)
    }

    pub fn find(&self, selector: &Selector) -> Found<'_> {
        locator::find(&self.content, selector)
    }

    pub fn find_by_tag(&self, tag: &str) -> Found<'_> {
        self.find(&Selector::tag(tag))
    }

    pub fn find_by_id(&self, id: &str) -> Found<'_> {
        self.find(&Selector::id(id))
    }

    pub fn find_by_class(&self, class: &str) -> Found<'_> {
        self.find(&Selector::class(class))
    }

    /// Set the document title.
    ///
    /// Tried in order, each step only if the previous found nothing:
    /// 1. replace the content of every `title` node
    /// 2. append a `title` to the children of the first `head` node,
    ///    replacing any text it held
    /// 3. append a new `head` holding a `title` to the root forest
    pub fn set_title<'t>(&mut self, title: &'t str) -> &'t str {
        let titles = locator::locate(&self.content, &Selector::tag("title"));
        if !titles.is_empty() {
            for path in &titles {
                if let Some(node) = locator::node_at_mut(&mut self.content, path) {
                    node.content = Content::Text(title.to_string());
                }
            }
            return title;
        }

        let heads = locator::locate(&self.content, &Selector::tag("head"));
        if let Some(head) = heads
            .first()
            .and_then(|path| locator::node_at_mut(&mut self.content, path))
        {
            match &mut head.content {
                Content::Children(children) => children.push(title_node(title)),
                // Text or nothing: the title becomes the only child
                other => *other = Content::Children(vec![title_node(title)]),
            }
            return title;
        }

        self.content
            .push(Node::element("head").with_content(title_node(title)));
        title
    }

    /// Reset the forest to a minimal skeleton with `content` as the body.
    ///
    /// Discards everything previously in the document.
    pub fn with_boilerplate(&mut self, content: impl Into<Content>) -> &mut Self {
        self.content = vec![
            Node::element("head").with_content(vec![
                Node::element("meta").with_attr("charset", "utf-8"),
                Node::element("meta")
                    .with_attr("name", "viewport")
                    .with_attr("content", VIEWPORT),
            ]),
            Node::element("body").with_content(content),
        ];
        self
    }

    /// Append to the root forest
    pub fn add_element(&mut self, data: impl Into<Insertion>) -> &mut Self {
        mutator::push_or_concat(&mut self.content, data.into());
        self
    }

    /// Merge `data` into every node matching `target`.
    ///
    /// Fails with `TargetNotFound` if nothing matches; the forest is left
    /// untouched in that case.
    pub fn add_element_to_target(
        &mut self,
        data: impl Into<Insertion>,
        target: &Selector,
    ) -> Result<&mut Self> {
        mutator::insert_at_target(&mut self.content, target, data.into())?;
        Ok(self)
    }

    pub fn add_element_to_id(&mut self, id: &str, data: impl Into<Insertion>) -> Result<&mut Self> {
        self.add_element_to_target(data, &Selector::id(id))
    }

    pub fn add_element_to_class(
        &mut self,
        class: &str,
        data: impl Into<Insertion>,
    ) -> Result<&mut Self> {
        self.add_element_to_target(data, &Selector::class(class))
    }

    pub fn add_element_to_type(
        &mut self,
        tag: &str,
        data: impl Into<Insertion>,
    ) -> Result<&mut Self> {
        self.add_element_to_target(data, &Selector::tag(tag))
    }

    /// Number of matches for `selector`, without borrowing them
    pub fn count(&self, selector: &Selector) -> usize {
        match self.find(selector) {
            Matches::NotFound => 0,
            Matches::One(_) => 1,
            Matches::Many(nodes) => nodes.len(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}

fn title_node(title: &str) -> Node {
    Node::element("title").with_content(title)
}

fn parse_forest(value: &Value) -> Result<Vec<Node>> {
    if !value.is_array() {
        return Err(DomError::InvalidContent(json_kind(value).to_string()));
    }
    Ok(serde_json::from_value(value.clone())?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;
    use serde_json::json;

    fn recorded() -> (Arc<MemoryReporter>, Document) {
        let reporter = Arc::new(MemoryReporter::new());
        let document = Document::with_reporter(reporter.clone());
        (reporter, document)
    }

    #[test]
    fn test_new_document_is_empty() {
        let document = Document::new();
        assert!(document.content().is_empty());
        assert_eq!(document.html(), "<!DOCTYPE html><html></html>");
        assert_eq!(document.content_html(), "");
        assert_eq!(document.find_by_tag("title"), Matches::NotFound);
    }

    #[test]
    fn test_from_json_non_array_falls_back_to_empty() {
        let reporter = Arc::new(MemoryReporter::new());
        let document = Document::from_json(&json!({ "type": "p" }), reporter.clone());

        assert!(document.content().is_empty());
        let reports = reporter.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].severity, Severity::Error);
        assert!(reports[0].message.contains("an object"));
    }

    #[test]
    fn test_set_content_json_keeps_prior_content_on_error() {
        let (reporter, mut document) = recorded();
        assert!(document.set_content_json(&json!([{ "type": "p", "content": "kept" }])));

        assert!(!document.set_content_json(&json!("nope")));
        assert!(!document.set_content_json(&json!([{ "type": 5 }])));

        assert_eq!(document.content_html(), "<p>kept</p>");
        assert_eq!(reporter.count(Severity::Error), 2);
    }

    #[test]
    fn test_set_content_json_accepts_scalars() {
        let (reporter, mut document) = recorded();
        assert!(document.set_content_json(&json!([
            { "type": "p", "attributes": { "dataX": null }, "content": 5 }
        ])));

        assert_eq!(document.content_html(), r#"<p data-x="null">5</p>"#);
        assert_eq!(reporter.count(Severity::Error), 0);
    }

    #[test]
    fn test_add_element_preserves_order() {
        let mut document = Document::new();
        document
            .add_element(Node::element("h1").with_content("e1"))
            .add_element(Node::element("p").with_content("e2"))
            .add_element(vec![Node::element("footer").with_content("e3")]);

        assert_eq!(
            document.content_html(),
            "<h1>e1</h1><p>e2</p><footer>e3</footer>"
        );
    }

    #[test]
    fn test_set_title_replaces_existing_title() {
        let mut document = Document::with_content(vec![
            Node::element("head").with_content(vec![title_node("Old")]),
            Node::element("body"),
        ]);

        assert_eq!(document.set_title("New"), "New");
        assert_eq!(
            document.content_html(),
            "<head><title>New</title></head><body></body>"
        );
    }

    #[test]
    fn test_set_title_appends_to_head() {
        let mut document = Document::with_content(vec![Node::element("head").with_content(vec![
            Node::element("meta").with_attr("charset", "utf-8"),
        ])]);

        document.set_title("T");
        assert_eq!(
            document.content_html(),
            r#"<head><meta charset="utf-8"></meta><title>T</title></head>"#
        );
    }

    #[test]
    fn test_set_title_creates_children_for_empty_head() {
        let mut document = Document::with_content(vec![Node::element("head")]);
        document.set_title("T");
        assert_eq!(document.content_html(), "<head><title>T</title></head>");
    }

    #[test]
    fn test_set_title_replaces_text_in_head() {
        let mut document = Document::with_content(vec![Node::element("head").with_content("stray")]);
        document.set_title("T");
        assert_eq!(document.content_html(), "<head><title>T</title></head>");
    }

    #[test]
    fn test_set_title_creates_head() {
        let mut document = Document::with_content(vec![Node::element("body")]);
        document.set_title("T");

        assert_eq!(document.content().len(), 2);
        assert_eq!(
            document.content_html(),
            "<body></body><head><title>T</title></head>"
        );
    }

    #[test]
    fn test_with_boilerplate_resets_forest() {
        let mut document = Document::with_content(vec![Node::element("div")]);
        document.with_boilerplate(vec![Node::element("h1").with_content("Hi")]);

        let content = document.content();
        assert_eq!(content.len(), 2);
        assert_eq!(content[0].tag_name(), Some("head"));
        assert_eq!(content[0].children().map(<[Node]>::len), Some(2));
        assert_eq!(content[1].tag_name(), Some("body"));
        assert_eq!(document.count(&Selector::tag("div")), 0);
        assert_eq!(document.count(&Selector::tag("meta")), 2);
    }

    #[test]
    fn test_add_element_to_target_not_found_is_error() {
        let mut document = Document::new();
        let result = document.add_element_to_id("nowhere", Node::text("x"));
        assert!(matches!(result, Err(DomError::TargetNotFound(_))));
    }

    #[test]
    fn test_add_element_to_empty_id_is_error() {
        let mut document = Document::with_content(vec![Node::element("div").with_attr("id", "")]);
        let result = document.add_element_to_id("", Node::text("x"));

        assert!(matches!(result, Err(DomError::TargetNotFound(_))));
        assert_eq!(document.content_html(), r#"<div id=""></div>"#);
    }

    #[test]
    fn test_add_element_to_target_variants() {
        let mut document = Document::new();
        document.add_element(vec![
            Node::element("div").with_attr("id", "main").with_content("hello"),
            Node::element("ul").with_attr("class", "list"),
        ]);

        document
            .add_element_to_id("main", Node::element("span"))
            .unwrap()
            .add_element_to_class("list", Node::element("li").with_content("a"))
            .unwrap()
            .add_element_to_type("li", Node::element("b"))
            .unwrap();

        assert_eq!(
            document.content_html(),
            r#"<div id="main">hello<span></span></div><ul class="list"><li>a<b></b></li></ul>"#
        );
    }
}
