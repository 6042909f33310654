//! A legal-citation recognizer built from regular expressions.
//!
//! It knows the common forms found in law-review footnotes: full and short
//! case cites, federal statutes and regulations, law-journal articles,
//! *Id.*, *supra*, and bare section cites. It does not try to be exhaustive;
//! for anything more demanding, run a dedicated citation parser and load its
//! output with [`ExternalCitations`](super::ExternalCitations).

use super::{reporters::REPORTERS, Recognizer};
use crate::{
    cite::{CitationKind, CiteError, Footnote, LegalCitation, Span},
    userreporters::UserReporters,
};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use slog::{debug, trace};
use std::{cmp::Reverse, collections::HashMap};

/// A pincite: a page or a page range.
const PIN: &str = r"\d+(?:[-–]\d+)?";

lazy_static! {
    /// Regex for federal statutes and regulations, *e.g.*,
    /// `18 U.S.C. § 1030(a)(2)`.
    static ref STATUTE: Regex = Regex::new(
        r"\b(?P<title>\d+) (?P<code>U\.\s?S\.\s?C\.(?:\s?A\.)?|C\.\s?F\.\s?R\.) (?P<sign>§§?) ?(?P<section>\d[\w:-]*(?:\.\d[\w:-]*)*(?:\(\w+\))*)"
    )
    .unwrap();

    /// Regex for law-journal articles, *e.g.*, `18 U. Pa. J. Const. L. 797`.
    ///
    /// The journal is a run of capitalized abbreviations ending in `L.`,
    /// `J.`, `L.J.`, `Rev.`, or `Q.`.
    static ref JOURNAL: Regex = Regex::new(&format!(
        r"\b(?P<volume>\d+) (?P<journal>(?:[A-Z][A-Za-z.'’&]*\.? )*?(?:L\. ?J\.|L\.|J\.|Rev\.|Q\.)) (?P<page>\d+)(?:, (?P<pin>{pin}))?(?: \((?P<year>\d{{4}})\))?",
        pin = PIN
    ))
    .unwrap();

    /// Regex for *Id.* and *Ibid.*, with an optional pincite.
    static ref ID: Regex = Regex::new(&format!(
        r"\b(?:[Ii]d|[Ii]bid)\.(?:,? at (?P<pin>{pin}))?",
        pin = PIN
    ))
    .unwrap();

    /// Regex for *supra* cites, *e.g.*, `Barnett, supra note 4, at 12`.
    static ref SUPRA: Regex = Regex::new(&format!(
        r"\b(?P<name>[A-Z][\w'’.-]*), supra(?: note (?P<note>\d+))?(?:,? at (?P<pin>{pin}))?",
        pin = PIN
    ))
    .unwrap();

    /// Regex for a bare section cite with no code, *e.g.*, `§ 230`.
    static ref SECTION: Regex = Regex::new(
        r"§§? ?\d[\w:-]*(?:\.\d[\w:-]*)*(?:\(\w+\))*"
    )
    .unwrap();

    /// Regex for runs of whitespace.
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// The regular-expression recognizer.
///
/// Case cites depend on the reporter table, which can be extended with a
/// user-reporters file, so those two regexes are built per recognizer.
#[derive(Debug)]
pub struct PatternRecognizer {
    reporters: HashMap<String, String>,
    full_case: Regex,
    short_case: Regex,
}

impl PatternRecognizer {
    /// Build a recognizer from the built-in reporters plus any
    /// `user_reporters`. User entries replace built-in ones with the same
    /// spelling.
    pub fn new(user_reporters: Option<&UserReporters>) -> Result<PatternRecognizer, String> {
        let mut reporters: HashMap<String, String> = REPORTERS
            .entries()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        if let Some(u) = user_reporters {
            debug!(slog_scope::logger(), "Adding {} user reporter(s)", u.len());
            reporters.extend(u.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        // Longest first, so `F. Supp. 2d` is tried before `F.`.
        let mut spellings: Vec<&str> = reporters.keys().map(String::as_str).collect();
        spellings.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let alternation = spellings
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<String>>()
            .join("|");

        let full_case = Regex::new(&format!(
            r"\b(?P<volume>\d+) (?P<reporter>{r}) (?P<page>\d+)(?:, (?P<pin>{pin}))?(?: \((?P<paren>[^()]*\d{{4}})\))?",
            r = alternation,
            pin = PIN
        ))
        .map_err(|e| format!("error building the case-citation pattern—{}", e))?;

        let short_case = Regex::new(&format!(
            r"(?:\b(?P<name>[A-Z][\w'’.-]*), )?\b(?P<volume>\d+) (?P<reporter>{r}) at (?P<pin>{pin})",
            r = alternation,
            pin = PIN
        ))
        .map_err(|e| format!("error building the short-case-citation pattern—{}", e))?;

        Ok(PatternRecognizer {
            reporters,
            full_case,
            short_case,
        })
    }

    fn reporter<'a>(&'a self, written: &'a str) -> &'a str {
        self.reporters
            .get(written)
            .map(String::as_str)
            .unwrap_or(written)
    }

    fn candidates(&self, text: &str) -> Vec<LegalCitation> {
        let mut found = Vec::new();

        for caps in self.full_case.captures_iter(text) {
            let normalized = format!(
                "{} {} {}",
                &caps["volume"],
                self.reporter(&caps["reporter"]),
                &caps["page"]
            );
            found.push(citation(&caps, CitationKind::Case, normalized));
        }

        for caps in self.short_case.captures_iter(text) {
            let normalized = format!(
                "{} {} at {}",
                &caps["volume"],
                self.reporter(&caps["reporter"]),
                &caps["pin"]
            );
            found.push(citation(&caps, CitationKind::Case, normalized));
        }

        for caps in STATUTE.captures_iter(text) {
            let code = WHITESPACE.replace_all(&caps["code"], "");
            let normalized = format!(
                "{} {} {} {}",
                &caps["title"], code, &caps["sign"], &caps["section"]
            );
            found.push(citation(&caps, CitationKind::Statute, normalized));
        }

        for caps in JOURNAL.captures_iter(text) {
            let normalized = format!(
                "{} {} {}",
                &caps["volume"],
                collapse(&caps["journal"]),
                &caps["page"]
            );
            found.push(citation(&caps, CitationKind::Journal, normalized));
        }

        for caps in ID.captures_iter(text) {
            let normalized = match caps.name("pin") {
                Some(pin) => format!("Id. at {}", pin.as_str()),
                None => "Id.".to_string(),
            };
            found.push(citation(&caps, CitationKind::Id, normalized));
        }

        for caps in SUPRA.captures_iter(text) {
            let mut normalized = format!("{}, supra", &caps["name"]);
            if let Some(note) = caps.name("note") {
                normalized.push_str(" note ");
                normalized.push_str(note.as_str());
            }
            if let Some(pin) = caps.name("pin") {
                normalized.push_str(", at ");
                normalized.push_str(pin.as_str());
            }
            found.push(citation(&caps, CitationKind::Supra, normalized));
        }

        for m in SECTION.find_iter(text) {
            found.push(LegalCitation::new(
                Span::new(m.start(), m.end()),
                CitationKind::Unknown,
                collapse(m.as_str()),
            ));
        }

        found
    }
}

impl Recognizer for PatternRecognizer {
    fn recognize(&self, footnote: &Footnote) -> Result<Vec<LegalCitation>, CiteError> {
        let mut candidates = self.candidates(&footnote.text);

        // Where patterns overlap, the earliest and then the longest wins.
        candidates.sort_by_key(|c| (c.span.start, Reverse(c.span.end)));
        let mut citations: Vec<LegalCitation> = Vec::with_capacity(candidates.len());
        let mut covered = 0;
        for candidate in candidates {
            if candidate.span.start >= covered {
                covered = candidate.span.end;
                citations.push(candidate);
            }
        }

        trace!(
            slog_scope::logger(),
            "Footnote {}: {} legal citation(s) recognized",
            footnote.num,
            citations.len()
        );
        Ok(citations)
    }
}

fn citation(caps: &Captures, kind: CitationKind, normalized: String) -> LegalCitation {
    let whole = caps.get(0).unwrap();
    LegalCitation::new(Span::new(whole.start(), whole.end()), kind, normalized)
}

fn collapse(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}
