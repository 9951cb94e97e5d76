//! Link target classification.
//!
//! Man pages distinguish three kinds of references:
//! - **Mail** (`mailto:user@example.com`): rendered with `.MT`/`.ME`
//! - **Man page** (`man:ls(1)`): rendered as a `.BR` cross-reference
//! - **URL** (anything else): rendered with `.UR`/`.UE`

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

static MAN_PAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^man:([A-Za-z0-9_-]+)(?:\((\d[a-z]?)\))?").expect("man link pattern is valid")
});

/// A classified link href, borrowing from the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// `mailto:` link; the address has the scheme stripped.
    Mail { address: &'a str },
    /// `man:` link to another manual page.
    ManPage {
        name: &'a str,
        section: Option<&'a str>,
    },
    /// Any other href.
    Url(&'a str),
}

impl<'a> LinkTarget<'a> {
    /// Classify a raw href.
    ///
    /// A `man:` href that does not start with a page name (e.g. `man:` or
    /// `man:(1)`) is treated as a plain URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use roffdown::roff::LinkTarget;
    ///
    /// assert_eq!(
    ///     LinkTarget::parse("man:ls(1)"),
    ///     LinkTarget::ManPage { name: "ls", section: Some("1") }
    /// );
    /// assert_eq!(
    ///     LinkTarget::parse("mailto:me@example.com"),
    ///     LinkTarget::Mail { address: "me@example.com" }
    /// );
    /// ```
    pub fn parse(href: &'a str) -> Self {
        if let Some(address) = href.strip_prefix("mailto:") {
            return LinkTarget::Mail { address };
        }

        if href.starts_with("man:") {
            if let Some(caps) = MAN_PAGE.captures(href)
                && let Some(name) = caps.get(1)
            {
                return LinkTarget::ManPage {
                    name: name.as_str(),
                    section: caps.get(2).map(|m| m.as_str()),
                };
            }
            warn!(href, "malformed man: link, rendering as a plain URL");
        }

        LinkTarget::Url(href)
    }
}
