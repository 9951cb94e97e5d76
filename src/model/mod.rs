//! Document tree consumed by the converter.
//!
//! This module contains:
//! - Node kinds and their payloads
//! - Typographic symbol and smart quote keys
//! - The root document container and its JSON loading

mod document;
mod node;

pub use document::Document;
pub use node::{Node, SmartQuote, TypographicSym};
