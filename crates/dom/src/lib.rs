//! Document tree model and HTML serializer
//!
//! Build markup as nested node descriptors instead of concatenating
//! strings, find nodes again by tag, id or class, and merge new content
//! into them.
//!
//! ## Core Design
//!
//! ```text
//! Vec<Node> (forest) ──Serializer──→ String
//!        │
//!        ├──Locator(Selector)──→ NotFound | One | Many
//!        │
//!        └──Mutator(Selector, Insertion)──→ forest updated in place
//! ```
//!
//! Content shape (`NoContent` / `Text` / `Children`) is an explicit enum;
//! every algorithm matches on it exhaustively.

pub mod document;
pub mod error;
pub mod locator;
pub mod mutator;
pub mod report;
pub mod serializer;
pub mod types;

pub use document::Document;
pub use error::{DomError, Result};
pub use locator::{Found, Matches, NodePath, Selector};
pub use mutator::Insertion;
pub use report::{MemoryReporter, Reporter, Severity, TracingReporter};
pub use serializer::{HtmlSerializer, RenderOptions};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boilerplate_title_end_to_end() {
        let mut document = Document::new();
        document.with_boilerplate(vec![Node::element("p").with_content("hi")]);
        document.set_title("T");

        assert_eq!(
            document.html(),
            concat!(
                "<!DOCTYPE html><html>",
                "<head>",
                r#"<meta charset="utf-8"></meta>"#,
                r#"<meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no"></meta>"#,
                "<title>T</title>",
                "</head>",
                "<body><p>hi</p></body>",
                "</html>"
            )
        );
    }
}
