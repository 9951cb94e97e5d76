//! Root container of a parsed document.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::node::Node;
use crate::error::Result;

/// A parsed markdown document: the root container of top-level block nodes.
///
/// The tree is built by an external markdown parser, either directly in Rust
/// or handed over as JSON:
///
/// ```
/// use roffdown::Document;
///
/// let doc = Document::from_json(r#"{"children": [{"type": "hr"}]}"#).unwrap();
/// assert_eq!(doc.children.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level block nodes.
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Document {
    /// Create a document from its top-level blocks.
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Parse a JSON document tree.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON document tree from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Open a JSON document tree from a file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Serialize the tree back to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
