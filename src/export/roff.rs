//! Roff Exporter - converts a document tree to a man page.
//!
//! Wraps the pure renderer in [`crate::roff`] with configuration and
//! writer-based output.

use std::io::{self, Write};

use tracing::debug;

use crate::model::Document;
use crate::roff::RenderContext;

use super::Exporter;

/// Configuration for roff export.
///
/// The default configuration produces exactly the renderer's output: the
/// comment banner, then the body, with no trailing newline.
#[derive(Debug, Clone)]
pub struct RoffConfig {
    /// Emit the two-line comment banner.
    pub banner: bool,
    /// End the output with a newline.
    pub trailing_newline: bool,
}

impl Default for RoffConfig {
    fn default() -> Self {
        Self {
            banner: true,
            trailing_newline: false,
        }
    }
}

impl RoffConfig {
    /// Set whether the comment banner is emitted.
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Set whether the output ends with a newline.
    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }
}

/// Exporter for roff (man page) output.
#[derive(Debug, Clone, Default)]
pub struct RoffExporter {
    config: RoffConfig,
}

impl RoffExporter {
    /// Create a new RoffExporter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RoffExporter with the specified configuration.
    pub fn with_config(config: RoffConfig) -> Self {
        Self { config }
    }

    /// Render a document to a string.
    ///
    /// Every call uses a fresh render context, so ordered-list numbering
    /// never carries over between documents.
    pub fn render(&self, doc: &Document) -> String {
        let ctx = RenderContext::new();
        let mut out = if self.config.banner {
            ctx.render(doc)
        } else {
            ctx.render_body(doc)
        };
        if self.config.trailing_newline && !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

impl Exporter for RoffExporter {
    fn export<W: Write>(&self, doc: &Document, writer: &mut W) -> io::Result<()> {
        let out = self.render(doc);
        debug!(
            blocks = doc.children.len(),
            bytes = out.len(),
            "rendered man page"
        );
        writer.write_all(out.as_bytes())?;
        writer.flush()
    }
}
