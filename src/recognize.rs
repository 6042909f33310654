//! Legal-citation recognizers.
//!
//! A recognizer finds the legal citations in a footnote and reports each as a
//! span of the footnote's text, a kind, and a normalized form. The merge
//! engine only relies on the spans being in bounds and non-overlapping; it
//! does not rely on their order.
//!
//! Two recognizers are provided: [`PatternRecognizer`], which uses regular
//! expressions for the common citation forms, and [`ExternalCitations`],
//! which replays citations found by another tool.

pub mod external;
pub mod pattern;
pub mod reporters;

pub use external::ExternalCitations;
pub use pattern::PatternRecognizer;

use crate::cite::{CiteError, Footnote, LegalCitation};

pub trait Recognizer {
    /// Find the legal citations in `footnote`.
    fn recognize(&self, footnote: &Footnote) -> Result<Vec<LegalCitation>, CiteError>;
}
