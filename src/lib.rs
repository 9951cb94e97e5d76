//! # roffdown
//!
//! Convert parsed markdown document trees into roff man pages.
//!
//! Markdown parsing happens elsewhere: roffdown consumes the node tree a
//! markdown parser produces (built in Rust, or loaded from JSON) and renders
//! it with the `man` macro package.
//!
//! ## Quick Start
//!
//! ```
//! use roffdown::{Document, Node, render_document};
//!
//! let doc = Document::new(vec![
//!     Node::plain_header(1, "mytool 1"),
//!     Node::plain_header(2, "SYNOPSIS"),
//!     Node::paragraph(vec![Node::codespan("mytool"), Node::text(" [--verbose]")]),
//! ]);
//!
//! let roff = render_document(&doc);
//! assert!(roff.ends_with(".TH mytool 1\n.SH SYNOPSIS\n.PP\n\\fB\\fCmytool\\fR [\\-\\-verbose]"));
//! ```
//!
//! ## Configured Export
//!
//! ```
//! use roffdown::{Document, Node};
//! use roffdown::export::{Exporter, RoffConfig, RoffExporter};
//!
//! let doc = Document::new(vec![Node::HorizontalRule]);
//! let config = RoffConfig::default().with_banner(false).with_trailing_newline(true);
//!
//! let mut out = Vec::new();
//! RoffExporter::with_config(config).export(&doc, &mut out).unwrap();
//! assert_eq!(out, b".ti 0\n\\l'\\n(.lu'\n");
//! ```

pub mod error;
pub mod export;
pub mod model;
pub mod roff;

pub use error::{Error, Result};
pub use model::{Document, Node, SmartQuote, TypographicSym};
pub use roff::render_document;
