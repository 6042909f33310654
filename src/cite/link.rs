//! The link-citation scanner.
//!
//! Link citations are narrative cites to web pages that end in a URL and,
//! optionally, a bracketed permalink:
//!
//! `Randy E. Barnett, Kavanaugh Testimony, Volokh Conspiracy (Sept. 14, 2018), https://reason.com/... [https://perma.cc/WA8R-3SAV]`
//!
//! Legal-citation recognizers don't see these, so they are picked out of the
//! text the recognizer left uncovered.

use super::{LinkCitation, Span};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use slog::trace;

/// A URL token: `http` or `https`, no whitespace, no brackets, and no
/// trailing sentence punctuation.
const URL: &str = r"https?://[^\s/$.?#\[\]][^\s\[\]]*[^\s\[\].,;:]";

lazy_static! {
    /// Regex for a link citation.
    ///
    /// The author starts on a non-space character and runs to the first
    /// comma. The title, sponsoring organization, and any pincite run up to
    /// the parenthesized date and may hold their own parentheticals. The URL
    /// is `url` and the optional permalink is `permalink`.
    pub static ref LINK_CITATION: Regex = Regex::new(&format!(
        r"[^\s,;()][^,;()]*, (?:[^()]|\([^()]*\))+?\([^()]+\), (?P<url>{url})(?: \[(?P<permalink>{url})\])?",
        url = URL
    ))
    .unwrap();
}

/// Find the first link citation in `fragment`.
///
/// Only the first match is returned, even if the fragment holds several. Use
/// [`scan_all`] to collect every one.
pub fn scan(fragment: &str) -> Option<LinkCitation> {
    LINK_CITATION.captures(fragment).map(|caps| {
        let link = to_link(&caps);
        trace!(slog_scope::logger(), "Link citation found: {:?}", link.url);
        link
    })
}

/// Find every non-overlapping link citation in `fragment`, left to right.
pub fn scan_all(fragment: &str) -> Vec<LinkCitation> {
    let links: Vec<LinkCitation> = LINK_CITATION
        .captures_iter(fragment)
        .map(|caps| to_link(&caps))
        .collect();
    trace!(
        slog_scope::logger(),
        "{} link citation(s) found in fragment",
        links.len()
    );
    links
}

fn to_link(caps: &Captures) -> LinkCitation {
    // Group 0 and `url` always participate in a match.
    let whole = caps.get(0).unwrap();
    LinkCitation {
        source_text: whole.as_str().to_string(),
        url: caps["url"].to_string(),
        permalink: caps.name("permalink").map(|m| m.as_str().to_string()),
        span: Span::new(whole.start(), whole.end()),
    }
}
