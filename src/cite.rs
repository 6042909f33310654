//! The citation data model shared by the scanner, the merge engine, the
//! recognizers, and the report builder.

pub mod link;
pub mod merge;

use std::{fmt, ops::Range, str::FromStr};
use thiserror::Error;

/// A footnote pulled from the source document.
///
/// Footnotes are numbered with consecutive integers. The text is trimmed and
/// never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Footnote {
    pub num: u32,
    pub text: String,
}

impl Footnote {
    pub fn new(num: u32, text: impl Into<String>) -> Footnote {
        Footnote {
            num,
            text: text.into(),
        }
    }
}

/// A half-open byte range into a footnote's text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Span {
        Span { start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Move the span `offset` bytes to the right.
    pub fn shift(self, offset: usize) -> Span {
        Span::new(self.start + offset, self.end + offset)
    }

    /// Checks that the span can be used to slice `text`.
    ///
    /// `footnote` is only used for the error message.
    pub fn check(&self, footnote: u32, text: &str) -> Result<(), CiteError> {
        let problem = if self.start > self.end {
            Some(SpanProblem::Inverted)
        } else if self.end > text.len() {
            Some(SpanProblem::OutOfBounds { len: text.len() })
        } else if !text.is_char_boundary(self.start) || !text.is_char_boundary(self.end) {
            Some(SpanProblem::NotCharBoundary)
        } else {
            None
        };

        match problem {
            Some(problem) => Err(CiteError::MalformedSpan {
                footnote,
                span: *self,
                problem,
            }),
            None => Ok(()),
        }
    }

    /// The text under the span.
    pub fn slice<'a>(&self, footnote: u32, text: &'a str) -> Result<&'a str, CiteError> {
        self.check(footnote, text)?;
        Ok(&text[self.range()])
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// The closed set of legal-citation kinds a recognizer may report.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CitationKind {
    Case,
    Journal,
    Statute,
    Id,
    Supra,
    Unknown,
}

impl CitationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CitationKind::Case => "Case",
            CitationKind::Journal => "Journal",
            CitationKind::Statute => "Statute",
            CitationKind::Id => "Id",
            CitationKind::Supra => "Supra",
            CitationKind::Unknown => "Unknown",
        }
    }
}

impl FromStr for CitationKind {
    type Err = CiteError;

    /// Parses the kind names used by external recognizers.
    ///
    /// Both the short names and eyecite's class names are accepted. Anything
    /// else is an [`CiteError::UnknownKind`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Case" | "FullCaseCitation" | "ShortCaseCitation" => Ok(CitationKind::Case),
            "Journal" | "FullJournalCitation" => Ok(CitationKind::Journal),
            "Statute" | "FullLawCitation" => Ok(CitationKind::Statute),
            "Id" | "IdCitation" => Ok(CitationKind::Id),
            "Supra" | "SupraCitation" => Ok(CitationKind::Supra),
            "Unknown" | "UnknownCitation" => Ok(CitationKind::Unknown),
            _ => Err(CiteError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for CitationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A legal citation located by a recognizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegalCitation {
    pub span: Span,
    pub kind: CitationKind,
    pub normalized: String,
}

impl LegalCitation {
    pub fn new(span: Span, kind: CitationKind, normalized: impl Into<String>) -> LegalCitation {
        LegalCitation {
            span,
            kind,
            normalized: normalized.into(),
        }
    }
}

/// A narrative citation to a web page.
///
/// Format:
///
///   `<Author>, <Title> <Sponsoring Org.> <pincite> (<date>), <URL> [<permalink>]`
///
/// The permalink is optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkCitation {
    pub source_text: String,
    pub url: String,
    pub permalink: Option<String>,
    pub span: Span,
}

/// One element of a footnote's merged citation sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CitationEntry {
    Legal(LegalCitation),
    Link(LinkCitation),
}

impl CitationEntry {
    pub fn span(&self) -> Span {
        match self {
            CitationEntry::Legal(legal) => legal.span,
            CitationEntry::Link(link) => link.span,
        }
    }

    pub fn as_legal(&self) -> Option<&LegalCitation> {
        match self {
            CitationEntry::Legal(legal) => Some(legal),
            CitationEntry::Link(_) => None,
        }
    }

    pub fn as_link(&self) -> Option<&LinkCitation> {
        match self {
            CitationEntry::Legal(_) => None,
            CitationEntry::Link(link) => Some(link),
        }
    }
}

/// Contract violations between the recognizer and the rest of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CiteError {
    /// The recognizer reported a kind outside [`CitationKind`].
    #[error("unrecognized citation kind `{0}`")]
    UnknownKind(String),

    #[error("footnote {footnote}: citation span {span} {problem}")]
    MalformedSpan {
        footnote: u32,
        span: Span,
        problem: SpanProblem,
    },
}

/// What is wrong with a [`Span`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanProblem {
    Inverted,
    OutOfBounds { len: usize },
    NotCharBoundary,
    Overlaps { other: Span },
    TextMismatch { found: String, expected: String },
}

impl fmt::Display for SpanProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanProblem::Inverted => write!(f, "ends before it starts"),
            SpanProblem::OutOfBounds { len } => {
                write!(f, "runs past the end of the text ({} bytes)", len)
            }
            SpanProblem::NotCharBoundary => write!(f, "splits a character"),
            SpanProblem::Overlaps { other } => write!(f, "overlaps citation span {}", other),
            SpanProblem::TextMismatch { found, expected } => {
                write!(f, "holds `{}` instead of `{}`", found, expected)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod spans {
        use super::*;

        #[test]
        fn slice_inside_text() {
            let text = "See 389 U.S. 347 (1967).";
            assert_eq!(Span::new(4, 16).slice(1, text).unwrap(), "389 U.S. 347");
        }

        #[test]
        fn empty_span_at_end() {
            assert_eq!(Span::new(3, 3).slice(1, "abc").unwrap(), "");
        }

        #[test]
        fn out_of_bounds() {
            let err = Span::new(2, 10).check(7, "short").unwrap_err();
            assert_eq!(
                err,
                CiteError::MalformedSpan {
                    footnote: 7,
                    span: Span::new(2, 10),
                    problem: SpanProblem::OutOfBounds { len: 5 },
                }
            );
            assert_eq!(
                err.to_string(),
                "footnote 7: citation span 2..10 runs past the end of the text (5 bytes)"
            );
        }

        #[test]
        fn inverted() {
            let err = Span::new(4, 2).check(1, "abcdef").unwrap_err();
            assert!(matches!(
                err,
                CiteError::MalformedSpan {
                    problem: SpanProblem::Inverted,
                    ..
                }
            ));
        }

        #[test]
        fn splits_character() {
            // The opening quote is three bytes long.
            let text = "“Katz”";
            let err = Span::new(1, 4).check(1, text).unwrap_err();
            assert!(matches!(
                err,
                CiteError::MalformedSpan {
                    problem: SpanProblem::NotCharBoundary,
                    ..
                }
            ));
        }
    }

    mod kinds {
        use super::*;

        #[test]
        fn parse_short_and_eyecite_names() {
            assert_eq!("Case".parse::<CitationKind>().unwrap(), CitationKind::Case);
            assert_eq!(
                "ShortCaseCitation".parse::<CitationKind>().unwrap(),
                CitationKind::Case
            );
            assert_eq!(
                "FullLawCitation".parse::<CitationKind>().unwrap(),
                CitationKind::Statute
            );
            assert_eq!(
                "SupraCitation".parse::<CitationKind>().unwrap(),
                CitationKind::Supra
            );
        }

        #[test]
        fn unknown_kind_is_an_error() {
            assert_eq!(
                "FullRegulationCitation".parse::<CitationKind>(),
                Err(CiteError::UnknownKind("FullRegulationCitation".to_string()))
            );
        }

        #[test]
        fn display_round_trips() {
            for kind in [
                CitationKind::Case,
                CitationKind::Journal,
                CitationKind::Statute,
                CitationKind::Id,
                CitationKind::Supra,
                CitationKind::Unknown,
            ] {
                assert_eq!(kind.to_string().parse::<CitationKind>().unwrap(), kind);
            }
        }
    }
}
