//! Pure roff generation from a parsed markdown tree.
//!
//! This module provides the conversion engine that renders a [`Document`]
//! as man-page roff. The design separates pure rendering logic from I/O:
//!
//! - [`escape`]: Pure string transformation for roff escaping
//! - [`symbols`]: Fixed tables for typographic symbols and smart quotes
//! - [`links`]: Classification of link targets (mail, man page, URL)
//! - [`render`]: Core tree → roff rendering
//!
//! The export layer ([`crate::export`]) handles configuration and writing,
//! calling these pure functions to generate content.
//!
//! ## Design Notes
//!
//! - **Dispatch by kind**: every node kind maps to one rule; kinds with no
//!   rule produce no output at all (not even an empty line)
//! - **Inline joining**: inline children are concatenated, then trimmed
//! - **Ordered lists**: each `ol` gets its own `step<N>` number register,
//!   numbered in document order for the whole conversion
//! - **Definition paragraphs**: emphasis or code followed by indented text
//!   becomes a `.TP` tagged paragraph
//! - **Code spans** are emitted verbatim; all other text is escaped
//!
//! [`Document`]: crate::model::Document

mod escape;
mod links;
mod render;
mod symbols;

pub use escape::escape_roff;
pub use links::LinkTarget;
pub use render::{BANNER, RenderContext, render_document};
