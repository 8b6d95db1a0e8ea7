//! HtmlCreator - Facade over a Document and its I/O collaborators
//!
//! The document does the real work; this type adds rendering defaults,
//! file output and outcome reporting.

use creator_dom::{Content, Document, Node, RenderOptions, Reporter, Severity, TracingReporter};
use std::path::Path;
use std::sync::Arc;

use crate::config::CreatorConfig;
use crate::persist::{FsPersister, Persist, Result};

pub struct HtmlCreator {
    pub config: CreatorConfig,
    document: Document,
    persister: Arc<dyn Persist>,
    reporter: Arc<dyn Reporter>,
}

impl HtmlCreator {
    /// Create a creator with an optional initial forest
    pub fn new(content: Option<Vec<Node>>) -> Self {
        Self::with_parts(
            content,
            CreatorConfig::default(),
            Arc::new(FsPersister),
            Arc::new(TracingReporter),
        )
    }

    /// Create a creator with explicit collaborators
    pub fn with_parts(
        content: Option<Vec<Node>>,
        config: CreatorConfig,
        persister: Arc<dyn Persist>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        let mut document = Document::with_reporter(Arc::clone(&reporter));
        document.set_content(content.unwrap_or_default());

        Self {
            config,
            document,
            persister,
            reporter,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Reset the document to the boilerplate skeleton around `content`
    pub fn with_boilerplate(&mut self, content: impl Into<Content>) -> &mut Self {
        self.document.with_boilerplate(content);
        self
    }

    /// Render markup, falling back to the configured options
    pub fn render_html(&self, options: Option<RenderOptions>) -> String {
        self.document.render(options.unwrap_or(self.config.render))
    }

    /// Render with the configured options and write to `destination`.
    ///
    /// The outcome is reported either way; the error is also returned.
    pub async fn render_to_file(&self, destination: impl AsRef<Path>) -> Result<()> {
        let path = self.config.resolve(destination.as_ref());
        let html = self.render_html(None);

        match self.persister.persist(&path, &html).await {
            Ok(()) => {
                let message = format!("HTML generated ({})", path.display());
                self.reporter.report(Severity::Success, &message);
                Ok(())
            }
            Err(e) => {
                self.reporter.report(Severity::Error, &e.to_string());
                Err(e)
            }
        }
    }
}

impl Default for HtmlCreator {
    fn default() -> Self {
        Self::new(None)
    }
}
