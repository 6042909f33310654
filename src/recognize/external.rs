//! Citations found by another tool and saved as JSON.
//!
//! The file looks like this:
//!
//! ```json
//! {
//!   "offsets": "chars",
//!   "footnotes": {
//!     "1": [
//!       { "start": 0, "end": 19, "kind": "FullCaseCitation", "normalized": "389 U.S. 347",
//!         "text": "389 U.S. 347 (1967)" }
//!     ]
//!   }
//! }
//! ```
//!
//! `offsets` says whether `start` and `end` count characters (the default,
//! and what Python tools such as eyecite report) or bytes. Footnotes that
//! don't appear have no legal citations.
//!
//! The offsets index bookpull's own footnote text, with whitespace collapsed
//! and hyperlink text included. `text` is optional; when present, it must
//! match what the span covers (ignoring differences in whitespace), so
//! offsets taken from differently extracted text fail instead of producing
//! the wrong rows.

use super::Recognizer;
use crate::cite::{CitationKind, CiteError, Footnote, LegalCitation, Span, SpanProblem};
use serde::Deserialize;
use slog::{debug, trace};
use std::collections::HashMap;

/// The unit of the offsets in the file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    #[default]
    Chars,
    Bytes,
}

/// A citation as written in the file.
#[derive(Clone, Debug, Deserialize)]
struct RawCitation {
    start: usize,
    end: usize,
    kind: String,
    #[serde(default)]
    normalized: String,
    #[serde(default)]
    text: Option<String>,
}

/// The externally recognized citations for a whole document.
#[derive(Clone, Debug, Deserialize)]
pub struct ExternalCitations {
    #[serde(default)]
    offsets: OffsetUnit,
    #[serde(default)]
    footnotes: HashMap<u32, Vec<RawCitation>>,
}

impl ExternalCitations {
    /// Deserialize the citations file.
    pub fn from_json(input: &str) -> Result<ExternalCitations, String> {
        match serde_json::from_str::<ExternalCitations>(input) {
            Ok(c) => {
                debug!(
                    slog_scope::logger(),
                    "Citations file parsed ({} footnote(s), {:?} offsets)",
                    c.footnotes.len(),
                    c.offsets
                );
                Ok(c)
            }
            Err(e) => Err(format!("error deserializing the citations file—{}", e)),
        }
    }
}

impl Recognizer for ExternalCitations {
    fn recognize(&self, footnote: &Footnote) -> Result<Vec<LegalCitation>, CiteError> {
        let raw = match self.footnotes.get(&footnote.num) {
            Some(r) => r,
            None => return Ok(Vec::new()),
        };
        trace!(
            slog_scope::logger(),
            "Footnote {}: {} external citation(s)",
            footnote.num,
            raw.len()
        );

        raw.iter()
            .map(|r| {
                let kind: CitationKind = r.kind.parse()?;
                let span = match self.offsets {
                    OffsetUnit::Bytes => Span::new(r.start, r.end),
                    OffsetUnit::Chars => char_span(footnote, r.start, r.end)?,
                };
                if let Some(expected) = &r.text {
                    check_text(footnote, span, expected)?;
                }
                Ok(LegalCitation::new(span, kind, r.normalized.clone()))
            })
            .collect()
    }
}

/// Convert a character span into a byte span of the footnote's text.
fn char_span(footnote: &Footnote, start: usize, end: usize) -> Result<Span, CiteError> {
    let text = footnote.text.as_str();
    let byte_offset = |chars: usize| -> Option<usize> {
        text.char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .nth(chars)
    };

    match (byte_offset(start), byte_offset(end)) {
        (Some(s), Some(e)) => Ok(Span::new(s, e)),
        _ => Err(CiteError::MalformedSpan {
            footnote: footnote.num,
            span: Span::new(start, end),
            problem: SpanProblem::OutOfBounds {
                len: text.chars().count(),
            },
        }),
    }
}

/// Check that `span` covers `expected`, ignoring differences in whitespace.
fn check_text(footnote: &Footnote, span: Span, expected: &str) -> Result<(), CiteError> {
    let found = span.slice(footnote.num, &footnote.text)?;
    if found.split_whitespace().eq(expected.split_whitespace()) {
        Ok(())
    } else {
        Err(CiteError::MalformedSpan {
            footnote: footnote.num,
            span,
            problem: SpanProblem::TextMismatch {
                found: found.to_string(),
                expected: expected.to_string(),
            },
        })
    }
}
