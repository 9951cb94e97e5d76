//! Fixed substitution tables for typographic symbols and smart quotes.

use crate::model::{SmartQuote, TypographicSym};

impl TypographicSym {
    /// The text emitted for this symbol.
    ///
    /// The spaced guillemet variants render the same character as the plain
    /// ones; the space belongs to the surrounding text.
    pub fn as_roff(self) -> &'static str {
        match self {
            TypographicSym::Ndash => "--",
            TypographicSym::Mdash => "\u{2014}",
            TypographicSym::Hellip => "\u{2026}",
            TypographicSym::Laquo | TypographicSym::LaquoSpace => "\u{ab}",
            TypographicSym::Raquo | TypographicSym::RaquoSpace => "\u{bb}",
        }
    }
}

impl SmartQuote {
    /// The curly quote character emitted for this quote.
    pub fn as_roff(self) -> &'static str {
        match self {
            SmartQuote::Lsquo => "\u{2018}",
            SmartQuote::Rsquo => "\u{2019}",
            SmartQuote::Ldquo => "\u{201c}",
            SmartQuote::Rdquo => "\u{201d}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashes_and_ellipsis() {
        assert_eq!(TypographicSym::Ndash.as_roff(), "--");
        assert_eq!(TypographicSym::Mdash.as_roff(), "—");
        assert_eq!(TypographicSym::Hellip.as_roff(), "…");
    }

    #[test]
    fn test_spaced_guillemets_match_plain() {
        assert_eq!(TypographicSym::Laquo.as_roff(), "«");
        assert_eq!(TypographicSym::LaquoSpace.as_roff(), "«");
        assert_eq!(TypographicSym::Raquo.as_roff(), "»");
        assert_eq!(TypographicSym::RaquoSpace.as_roff(), "»");
    }

    #[test]
    fn test_smart_quotes() {
        assert_eq!(SmartQuote::Lsquo.as_roff(), "‘");
        assert_eq!(SmartQuote::Rsquo.as_roff(), "’");
        assert_eq!(SmartQuote::Ldquo.as_roff(), "“");
        assert_eq!(SmartQuote::Rdquo.as_roff(), "”");
    }
}
