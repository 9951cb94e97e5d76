//! Pure roff escaping utilities.

use std::borrow::Cow;

use memchr::memchr2;

/// Escape text for inclusion in roff output.
///
/// - Backslash: `\\` (so it is not read as an escape introducer)
/// - Hyphen: `\-` (so the formatter neither breaks nor reshapes it)
///
/// Each backslash is doubled before hyphens are rewritten, so the `\` of a
/// `\-` escape is never itself doubled. Text with neither character is
/// returned borrowed.
///
/// # Examples
///
/// ```
/// use roffdown::roff::escape_roff;
///
/// assert_eq!(escape_roff("--help"), "\\-\\-help");
/// assert_eq!(escape_roff("C:\\dir"), "C:\\\\dir");
/// assert_eq!(escape_roff("plain"), "plain");
/// ```
pub fn escape_roff(text: &str) -> Cow<'_, str> {
    if memchr2(b'\\', b'-', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + text.len() / 8 + 2);
    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '-' => result.push_str("\\-"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
