//! Core tree → roff rendering.
//!
//! This module provides pure rendering logic that transforms a parsed
//! markdown tree into man-page roff. No I/O is performed here - the export
//! layer handles writing to files/writers.

use tracing::{debug, trace};

use crate::model::{Document, Node};

use super::escape::escape_roff;
use super::links::LinkTarget;

/// Two-line comment banner placed at the top of every rendered page.
pub const BANNER: &str = concat!(
    ".\\\" Generated by roffdown ",
    env!("CARGO_PKG_VERSION"),
    "\n.\\\" ",
    env!("CARGO_PKG_REPOSITORY"),
    "#readme"
);

/// Item macro style for the list currently being rendered.
#[derive(Debug, Clone, Copy)]
enum ItemMarker {
    /// Bulleted list items.
    Bullet,
    /// Numbered list items driven by the `step<N>` register.
    Step(usize),
}

impl ItemMarker {
    /// Macro opening the first paragraph of an item.
    fn first(self) -> String {
        match self {
            ItemMarker::Bullet => ".IP \\(bu 2".to_string(),
            ItemMarker::Step(index) => format!(".IP \\n+[step{index}]"),
        }
    }

    /// Macro opening each following paragraph of the same item.
    fn continuation(self) -> String {
        match self {
            ItemMarker::Bullet => ".IP \"\" 2".to_string(),
            ItemMarker::Step(index) => format!(".IP \\n[step{index}]"),
        }
    }
}

/// State for one conversion pass.
///
/// The only state is the ordered-list counter. Each `ol` in document order
/// takes the next number and declares its own `step<N>` register, so nested
/// lists never share a register. A context renders exactly one document;
/// [`RenderContext::render`] consumes it.
#[derive(Debug, Default)]
pub struct RenderContext {
    ol_index: usize,
}

impl RenderContext {
    /// Create a new render context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ordered lists converted so far.
    #[cfg(test)]
    fn ol_index(&self) -> usize {
        self.ol_index
    }

    /// Render the document with the comment banner, consuming the context.
    pub fn render(self, doc: &Document) -> String {
        let body = self.render_body(doc);
        format!("{BANNER}\n{body}")
    }

    /// Render the document without the banner, consuming the context.
    ///
    /// Top-level blocks are joined by newlines. Blocks with no conversion
    /// rule are left out entirely rather than producing an empty line.
    pub fn render_body(mut self, doc: &Document) -> String {
        let blocks: Vec<String> = doc
            .children
            .iter()
            .filter_map(|node| self.convert_node(node))
            .collect();
        blocks.join("\n")
    }

    /// Convert a single node.
    ///
    /// Returns `None` for kinds with no conversion rule; such nodes
    /// contribute nothing. `Some("")` is real (empty) output.
    pub fn convert_node(&mut self, node: &Node) -> Option<String> {
        let out = match node {
            Node::Blank => ".LP".to_string(),
            Node::Text { value } | Node::Abbreviation { value } => {
                escape_roff(value).into_owned()
            }
            Node::TypographicSym { value } => value.as_roff().to_string(),
            Node::SmartQuote { value } => value.as_roff().to_string(),
            Node::Header {
                level, raw_text, ..
            } => {
                let macro_name = match *level {
                    1 => ".TH",
                    2 => ".SH",
                    _ => ".SS",
                };
                format!("{macro_name} {raw_text}")
            }
            Node::HorizontalRule => ".ti 0\n\\l'\\n(.lu'".to_string(),
            Node::UnorderedList { children } => {
                let items = self.convert_list_items(children, ItemMarker::Bullet);
                format!(".RS\n{items}\n.RE")
            }
            Node::OrderedList { children } => {
                self.ol_index += 1;
                let index = self.ol_index;
                trace!(index, "allocated ordered list register");
                let items = self.convert_list_items(children, ItemMarker::Step(index));
                format!(".nr step{index} 0 1\n.RS\n{items}\n.RE")
            }
            Node::BlockQuote { children } => self.convert_blockquote(children),
            Node::CodeBlock { value } => {
                format!(".nf\n{}\n.fi", escape_roff(value).trim_end())
            }
            Node::Comment { value } => value
                .lines()
                .map(|line| format!(".\\\" {line}"))
                .collect::<Vec<_>>()
                .join("\n"),
            Node::Paragraph { children } => self.convert_paragraph(children),
            Node::Emphasis { children } => {
                format!("\\fI{}\\fP", self.convert_children(children))
            }
            Node::Strong { children } => {
                format!("\\fB{}\\fP", self.convert_children(children))
            }
            Node::CodeSpan { value } => format!("\\fB\\fC{value}\\fR"),
            Node::Link { href, children } => self.convert_link(href, children),
            // List items are only converted through their enclosing list.
            Node::ListItem { .. } | Node::Unknown => {
                debug!(kind = node.kind(), "dropping node with no conversion rule");
                return None;
            }
        };
        Some(out)
    }

    /// Convert inline children: concatenate their output and trim the result.
    fn convert_children(&mut self, children: &[Node]) -> String {
        let mut out = String::new();
        for child in children {
            if let Some(text) = self.convert_node(child) {
                out.push_str(&text);
            }
        }
        out.trim().to_string()
    }

    fn convert_list_items(&mut self, items: &[Node], marker: ItemMarker) -> String {
        let mut converted = Vec::with_capacity(items.len());
        for item in items {
            if matches!(item, Node::ListItem { .. }) {
                converted.push(self.convert_list_item(item.children(), marker));
            } else {
                debug!(kind = item.kind(), "skipping non-item child of list");
            }
        }
        converted.join("\n")
    }

    /// Convert the paragraphs of a list item.
    ///
    /// The first paragraph opens the item with its marker; later paragraphs
    /// are continuation items. Other children produce no output.
    fn convert_list_item(&mut self, children: &[Node], marker: ItemMarker) -> String {
        let mut parts = Vec::new();
        for child in children {
            let Node::Paragraph { children: inline } = child else {
                continue;
            };
            let item_macro = if parts.is_empty() {
                marker.first()
            } else {
                marker.continuation()
            };
            let content = self.convert_children(inline);
            parts.push(format!("{item_macro}\n{content}"));
        }
        parts.join("\n")
    }

    fn convert_blockquote(&mut self, children: &[Node]) -> String {
        let mut parts = Vec::with_capacity(children.len());
        for child in children {
            let part = match child {
                Node::Paragraph { children: inline } => Some(self.convert_children(inline)),
                other => self.convert_node(other),
            };
            parts.extend(part);
        }
        format!(".PP\n.RS\n{}\n.RE", parts.join("\n"))
    }

    /// Convert a paragraph.
    ///
    /// A paragraph shaped like a definition (emphasis or code span, then text
    /// indented by two spaces or a tab) becomes a tagged paragraph with the
    /// term on its own line. Anything else is a plain paragraph.
    fn convert_paragraph(&mut self, children: &[Node]) -> String {
        if let [
            term @ (Node::Emphasis { .. } | Node::CodeSpan { .. }),
            Node::Text { value },
            rest @ ..,
        ] = children
            && (value.starts_with("  ") || value.starts_with('\t'))
        {
            let term = self.convert_node(term).unwrap_or_default();
            let description = escape_roff(value);
            let description = description.trim_start();
            let rest = self.convert_children(rest);
            let out = format!(".TP\n{term}\n{description}\n{rest}");
            return out.trim_end().to_string();
        }

        format!(".PP\n{}", self.convert_children(children))
    }

    fn convert_link(&mut self, href: &str, children: &[Node]) -> String {
        let text = self.convert_children(children);

        match LinkTarget::parse(href) {
            LinkTarget::Mail { address } => {
                if text == address {
                    format!("\n.MT {address}\n.ME")
                } else {
                    format!("{text}\n.MT {address}\n.ME")
                }
            }
            LinkTarget::ManPage {
                name,
                section: Some(section),
            } => format!("\n.BR {name} ({section})"),
            LinkTarget::ManPage {
                name,
                section: None,
            } => format!("\n.BR {name}"),
            LinkTarget::Url(href) => format!("{text}\n.UR {href}\n.UE"),
        }
    }
}

/// Render a document to roff, banner included.
///
/// This is the main entry point for conversion. It creates a fresh
/// `RenderContext`, so ordered-list numbering always starts at 1.
pub fn render_document(doc: &Document) -> String {
    RenderContext::new().render(doc)
}
