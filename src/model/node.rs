//! Document tree node kinds.

use serde::{Deserialize, Serialize};

/// Typographic symbols substituted by the markdown parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypographicSym {
    /// En dash (`--` in source).
    Ndash,
    /// Em dash (`---` in source).
    Mdash,
    /// Horizontal ellipsis (`...` in source).
    Hellip,
    /// Left guillemet (`<<`).
    Laquo,
    /// Right guillemet (`>>`).
    Raquo,
    /// Left guillemet followed by a space (`<< `).
    LaquoSpace,
    /// Right guillemet preceded by a space (` >>`).
    RaquoSpace,
}

/// Curly quotes substituted for straight quotes by the markdown parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmartQuote {
    /// Left single quote.
    Lsquo,
    /// Right single quote (also the apostrophe).
    Rsquo,
    /// Left double quote.
    Ldquo,
    /// Right double quote.
    Rdquo,
}

/// A node in the parsed markdown tree.
///
/// Every composite kind owns its children. The set of kinds is closed; a tree
/// producer that emits a kind outside this set deserializes to
/// [`Node::Unknown`], which converts to nothing.
///
/// In JSON the kind is the `type` tag, e.g.
/// `{"type": "header", "level": 2, "raw_text": "NAME", "children": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Blank line between blocks.
    Blank,
    /// Plain run of text.
    Text { value: String },
    /// Typographic symbol (dashes, ellipsis, guillemets).
    TypographicSym { value: TypographicSym },
    /// Curly quote.
    SmartQuote { value: SmartQuote },
    /// Heading. `raw_text` is the plain-text rendering computed by the parser.
    Header {
        level: u8,
        raw_text: String,
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Horizontal rule.
    #[serde(rename = "hr")]
    HorizontalRule,
    /// Bulleted list of [`Node::ListItem`]s.
    #[serde(rename = "ul")]
    UnorderedList {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Numbered list of [`Node::ListItem`]s.
    #[serde(rename = "ol")]
    OrderedList {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// List item. Only paragraph children produce output.
    #[serde(rename = "li")]
    ListItem {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Abbreviation (the abbreviated text itself).
    Abbreviation { value: String },
    #[serde(rename = "blockquote")]
    BlockQuote {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Verbatim code block.
    #[serde(rename = "codeblock")]
    CodeBlock { value: String },
    /// Source comment, possibly spanning several lines.
    Comment { value: String },
    Paragraph {
        #[serde(default)]
        children: Vec<Node>,
    },
    Emphasis {
        #[serde(default)]
        children: Vec<Node>,
    },
    Strong {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Inline code, rendered verbatim.
    #[serde(rename = "codespan")]
    CodeSpan { value: String },
    /// Hyperlink; the children are the visible text.
    Link {
        href: String,
        #[serde(default)]
        children: Vec<Node>,
    },
    /// A kind with no conversion rule.
    #[serde(other)]
    Unknown,
}

impl Node {
    /// Create a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    pub fn header(level: u8, raw_text: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Header {
            level,
            raw_text: raw_text.into(),
            children,
        }
    }

    /// Create a header whose only child is its raw text.
    pub fn plain_header(level: u8, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        Node::Header {
            level,
            children: vec![Node::text(raw_text.clone())],
            raw_text,
        }
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph { children }
    }

    pub fn emphasis(children: Vec<Node>) -> Self {
        Node::Emphasis { children }
    }

    pub fn strong(children: Vec<Node>) -> Self {
        Node::Strong { children }
    }

    pub fn codespan(value: impl Into<String>) -> Self {
        Node::CodeSpan {
            value: value.into(),
        }
    }

    pub fn codeblock(value: impl Into<String>) -> Self {
        Node::CodeBlock {
            value: value.into(),
        }
    }

    pub fn comment(value: impl Into<String>) -> Self {
        Node::Comment {
            value: value.into(),
        }
    }

    pub fn abbreviation(value: impl Into<String>) -> Self {
        Node::Abbreviation {
            value: value.into(),
        }
    }

    pub fn link(href: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Link {
            href: href.into(),
            children,
        }
    }

    pub fn unordered_list(items: Vec<Node>) -> Self {
        Node::UnorderedList { children: items }
    }

    pub fn ordered_list(items: Vec<Node>) -> Self {
        Node::OrderedList { children: items }
    }

    pub fn list_item(children: Vec<Node>) -> Self {
        Node::ListItem { children }
    }

    /// Create a list item holding a single paragraph of text.
    pub fn text_item(value: impl Into<String>) -> Self {
        Node::ListItem {
            children: vec![Node::paragraph(vec![Node::text(value)])],
        }
    }

    pub fn blockquote(children: Vec<Node>) -> Self {
        Node::BlockQuote { children }
    }

    pub fn typographic(sym: TypographicSym) -> Self {
        Node::TypographicSym { value: sym }
    }

    pub fn smart_quote(quote: SmartQuote) -> Self {
        Node::SmartQuote { value: quote }
    }

    /// Name of this node's kind, as used in the JSON `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Blank => "blank",
            Node::Text { .. } => "text",
            Node::TypographicSym { .. } => "typographic_sym",
            Node::SmartQuote { .. } => "smart_quote",
            Node::Header { .. } => "header",
            Node::HorizontalRule => "hr",
            Node::UnorderedList { .. } => "ul",
            Node::OrderedList { .. } => "ol",
            Node::ListItem { .. } => "li",
            Node::Abbreviation { .. } => "abbreviation",
            Node::BlockQuote { .. } => "blockquote",
            Node::CodeBlock { .. } => "codeblock",
            Node::Comment { .. } => "comment",
            Node::Paragraph { .. } => "paragraph",
            Node::Emphasis { .. } => "emphasis",
            Node::Strong { .. } => "strong",
            Node::CodeSpan { .. } => "codespan",
            Node::Link { .. } => "link",
            Node::Unknown => "unknown",
        }
    }

    /// Child nodes (empty for leaf kinds).
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Header { children, .. }
            | Node::UnorderedList { children }
            | Node::OrderedList { children }
            | Node::ListItem { children }
            | Node::BlockQuote { children }
            | Node::Paragraph { children }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Link { children, .. } => children,
            Node::Blank
            | Node::Text { .. }
            | Node::TypographicSym { .. }
            | Node::SmartQuote { .. }
            | Node::HorizontalRule
            | Node::Abbreviation { .. }
            | Node::CodeBlock { .. }
            | Node::Comment { .. }
            | Node::CodeSpan { .. }
            | Node::Unknown => &[],
        }
    }
}
