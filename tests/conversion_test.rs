//! Whole-document conversion tests.

use roffdown::roff::BANNER;
use roffdown::{Document, Node, SmartQuote, TypographicSym, render_document};

/// Render and strip the banner line pair.
fn render_body(doc: &Document) -> String {
    let out = render_document(doc);
    out.strip_prefix(BANNER)
        .and_then(|rest| rest.strip_prefix('\n'))
        .expect("output starts with banner")
        .to_string()
}

// ============================================================================
// Full pages
// ============================================================================

#[test]
fn test_kitchen_sink_page() {
    let doc = Document::new(vec![
        Node::plain_header(1, "grep 1"),
        Node::Blank,
        Node::plain_header(2, "NAME"),
        Node::Blank,
        Node::paragraph(vec![
            Node::text("grep "),
            Node::typographic(TypographicSym::Ndash),
            Node::text(" print lines"),
            Node::typographic(TypographicSym::Hellip),
        ]),
        Node::plain_header(2, "OPTIONS"),
        Node::paragraph(vec![
            Node::codespan("-i"),
            Node::text("  Ignore case, see "),
            Node::link("man:regex(7)", vec![Node::text("regex")]),
            Node::text("."),
        ]),
        Node::plain_header(3, "Examples"),
        Node::codeblock("grep -i foo file.txt\n"),
        Node::comment("TODO: more\nexamples"),
        Node::unordered_list(vec![
            Node::text_item("first"),
            Node::list_item(vec![
                Node::paragraph(vec![Node::emphasis(vec![Node::text("second")])]),
                Node::paragraph(vec![Node::text("continued")]),
            ]),
        ]),
        Node::ordered_list(vec![Node::text_item("one"), Node::text_item("two")]),
        Node::HorizontalRule,
        Node::blockquote(vec![Node::paragraph(vec![
            Node::smart_quote(SmartQuote::Ldquo),
            Node::text("quoted"),
            Node::smart_quote(SmartQuote::Rdquo),
        ])]),
        Node::paragraph(vec![
            Node::text("Report bugs to "),
            Node::link("mailto:bugs@example.com", vec![Node::text("bugs@example.com")]),
        ]),
    ]);

    let expected = [
        ".TH grep 1",
        ".LP",
        ".SH NAME",
        ".LP",
        ".PP",
        "grep -- print lines…",
        ".SH OPTIONS",
        ".TP",
        "\\fB\\fC-i\\fR",
        "Ignore case, see ",
        ".BR regex (7).",
        ".SS Examples",
        ".nf",
        "grep \\-i foo file.txt",
        ".fi",
        ".\\\" TODO: more",
        ".\\\" examples",
        ".RS",
        ".IP \\(bu 2",
        "first",
        ".IP \\(bu 2",
        "\\fIsecond\\fP",
        ".IP \"\" 2",
        "continued",
        ".RE",
        ".nr step1 0 1",
        ".RS",
        ".IP \\n+[step1]",
        "one",
        ".IP \\n+[step1]",
        "two",
        ".RE",
        ".ti 0",
        "\\l'\\n(.lu'",
        ".PP",
        ".RS",
        "“quoted”",
        ".RE",
        ".PP",
        "Report bugs to ",
        ".MT bugs@example.com",
        ".ME",
    ]
    .join("\n");

    assert_eq!(render_body(&doc), expected);
}

#[test]
fn test_banner_is_first_two_lines() {
    let out = render_document(&Document::new(vec![Node::plain_header(1, "X")]));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with(".\\\" Generated by roffdown "));
    assert!(lines[0].ends_with(env!("CARGO_PKG_VERSION")));
    assert!(lines[1].starts_with(".\\\" "));
    assert_eq!(lines[2], ".TH X");
}

// ============================================================================
// Ordered list numbering
// ============================================================================

#[test]
fn test_nested_ordered_lists_use_global_numbering() {
    // An ol inside a list item is not a paragraph, so it is skipped and
    // never allocates a register.
    let doc = Document::new(vec![
        Node::ordered_list(vec![Node::list_item(vec![
            Node::paragraph(vec![Node::text("outer")]),
            Node::ordered_list(vec![Node::text_item("inner")]),
        ])]),
        Node::blockquote(vec![Node::ordered_list(vec![Node::text_item("quoted")])]),
        Node::ordered_list(vec![Node::text_item("last")]),
    ]);

    let body = render_body(&doc);
    let registers: Vec<&str> = body
        .lines()
        .filter(|line| line.starts_with(".nr "))
        .collect();
    assert_eq!(
        registers,
        vec![".nr step1 0 1", ".nr step2 0 1", ".nr step3 0 1"]
    );
    assert!(!body.contains("inner"));
    assert!(body.contains(".IP \\n+[step2]\nquoted"));
    assert!(body.contains(".IP \\n+[step3]\nlast"));
}

#[test]
fn test_each_render_starts_numbering_at_one() {
    let doc = Document::new(vec![Node::ordered_list(vec![Node::text_item("a")])]);
    let first = render_document(&doc);
    let second = render_document(&doc);
    assert_eq!(first, second);
    assert!(second.contains(".nr step1 0 1"));
}

// ============================================================================
// Unknown kinds
// ============================================================================

#[test]
fn test_unknown_kinds_are_dropped_silently() {
    let doc = Document::new(vec![
        Node::Unknown,
        Node::plain_header(2, "NAME"),
        Node::Unknown,
        Node::paragraph(vec![Node::text("x"), Node::Unknown]),
    ]);
    assert_eq!(render_body(&doc), ".SH NAME\n.PP\nx");
}

#[test]
fn test_only_unknown_kinds_renders_banner_only() {
    let doc = Document::new(vec![Node::Unknown, Node::Unknown]);
    assert_eq!(render_document(&doc), format!("{BANNER}\n"));
}

// ============================================================================
// Links
// ============================================================================

#[test]
fn test_link_forms() {
    let doc = Document::new(vec![
        Node::paragraph(vec![Node::link(
            "mailto:me@x.com",
            vec![Node::text("me@x.com")],
        )]),
        Node::paragraph(vec![Node::link(
            "mailto:me@x.com",
            vec![Node::text("Email me")],
        )]),
        Node::paragraph(vec![Node::link("man:ls(1)", vec![Node::text("ls")])]),
        Node::paragraph(vec![Node::link("man:ls", vec![Node::text("ls")])]),
        Node::paragraph(vec![Node::link(
            "https://example.com/a-b",
            vec![Node::text("home")],
        )]),
    ]);

    let expected = [
        ".PP",
        ".MT me@x.com",
        ".ME",
        ".PP",
        "Email me",
        ".MT me@x.com",
        ".ME",
        ".PP",
        ".BR ls (1)",
        ".PP",
        ".BR ls",
        ".PP",
        "home",
        ".UR https://example.com/a-b",
        ".UE",
    ]
    .join("\n");

    assert_eq!(render_body(&doc), expected);
}
