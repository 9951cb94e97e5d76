//! Error types for roffdown operations.

use thiserror::Error;

/// Errors that can occur while loading a document tree or writing output.
///
/// Conversion itself cannot fail; these only come from the I/O and
/// tree-loading boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document tree: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
