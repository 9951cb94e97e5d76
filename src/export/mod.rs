//! Export module for writing man pages.
//!
//! Provides the `Exporter` trait and the roff implementation.
//!
//! # Architecture
//!
//! The `Exporter` trait uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes to any `Write` destination
//!
//! # Example
//!
//! ```no_run
//! use roffdown::Document;
//! use roffdown::export::{Exporter, RoffExporter};
//! use std::fs::File;
//!
//! let doc = Document::open("page.json")?;
//! let mut file = File::create("page.1")?;
//! RoffExporter::new().export(&doc, &mut file)?;
//! # Ok::<(), roffdown::Error>(())
//! ```

use std::io::{self, Write};

use crate::model::Document;

mod roff;

pub use roff::{RoffConfig, RoffExporter};

/// Trait for exporting documents to specific formats.
///
/// Exporters use a builder pattern where configuration is held in the struct,
/// and the `export` method writes to any `Write` destination.
pub trait Exporter {
    /// Export the document to the provided writer.
    ///
    /// The writer can be:
    /// - `std::fs::File` for disk output
    /// - `Vec<u8>` for in-memory output
    /// - `std::io::Stdout` or any other type implementing `Write`
    fn export<W: Write>(&self, doc: &Document, writer: &mut W) -> io::Result<()>;
}
