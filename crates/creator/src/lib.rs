//! HTML Creator
//!
//! Thin facade over [`creator_dom::Document`]: boilerplate setup,
//! rendering, and writing the result to disk with outcome reporting.
//!
//! ```no_run
//! use html_creator::{HtmlCreator, Node};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut creator = HtmlCreator::new(None);
//! creator.with_boilerplate(vec![Node::element("h1").with_content("Hello")]);
//! creator.document_mut().set_title("Home");
//! creator.render_to_file("public/index.html").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod creator;
pub mod persist;

pub use config::CreatorConfig;
pub use creator::HtmlCreator;
pub use creator_dom::{
    Content, Document, DomError, Insertion, Matches, Node, RenderOptions, Reporter, Selector,
    Severity,
};
pub use persist::{FsPersister, Persist, PersistError};
