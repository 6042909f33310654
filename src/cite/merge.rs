//! The citation merge engine.
//!
//! A recognizer finds the legal citations in a footnote. Everything it
//! doesn't cover is fair game for link citations. This module works out the
//! uncovered fragments, runs the link scanner over them, and interleaves the
//! two kinds of citation in the order they appear in the text.

use super::{
    link, CitationEntry, CiteError, Footnote, LegalCitation, LinkCitation, Span, SpanProblem,
};
use slog::{debug, trace};

/// Switches for the merge.
///
/// The defaults scan only the gaps *between* legal citations and keep only
/// the first link citation per fragment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Also scan the text before the first and after the last legal citation.
    pub scan_edges: bool,
    /// Keep every link citation in a fragment instead of only the first.
    pub all_links: bool,
}

/// Merge a footnote's legal citations with the link citations found around
/// them.
pub fn merge(
    footnote: &Footnote,
    legal: Vec<LegalCitation>,
    options: MergeOptions,
) -> Result<Vec<CitationEntry>, CiteError> {
    if options.all_links {
        merge_with(footnote, legal, options, link::scan_all)
    } else {
        merge_with(footnote, legal, options, |fragment| {
            link::scan(fragment).into_iter().collect()
        })
    }
}

/// [`merge`] with a caller-supplied scanner.
///
/// The scanner gets each uncovered fragment exactly once, left to right. The
/// spans it returns are relative to the fragment; they are moved into the
/// footnote's coordinates here. `options.all_links` is ignored: the scanner
/// decides how many links a fragment yields.
pub fn merge_with<F>(
    footnote: &Footnote,
    mut legal: Vec<LegalCitation>,
    options: MergeOptions,
    mut scanner: F,
) -> Result<Vec<CitationEntry>, CiteError>
where
    F: FnMut(&str) -> Vec<LinkCitation>,
{
    let text = footnote.text.as_str();

    for citation in &legal {
        citation.span.check(footnote.num, text)?;
    }

    // Recognizers don't promise any order.
    legal.sort_by_key(|c| (c.span.start, c.span.end));

    for pair in legal.windows(2) {
        if pair[0].span.end > pair[1].span.start {
            return Err(CiteError::MalformedSpan {
                footnote: footnote.num,
                span: pair[1].span,
                problem: SpanProblem::Overlaps {
                    other: pair[0].span,
                },
            });
        }
    }

    let mut scan = |start: usize, end: usize| -> Vec<CitationEntry> {
        trace!(
            slog_scope::logger(),
            "Scanning footnote {} fragment {}..{}",
            footnote.num,
            start,
            end
        );
        scanner(&text[start..end])
            .into_iter()
            .map(|mut l| {
                l.span = l.span.shift(start);
                CitationEntry::Link(l)
            })
            .collect()
    };

    if legal.is_empty() {
        let entries = scan(0, text.len());
        debug!(
            slog_scope::logger(),
            "Footnote {}: no legal citations, {} link citation(s)",
            footnote.num,
            entries.len()
        );
        return Ok(entries);
    }

    let mut entries = Vec::with_capacity(legal.len() * 2 - 1);

    if options.scan_edges {
        let head = legal[0].span.start;
        entries.extend(scan(0, head));
    }

    let gaps: Vec<Span> = legal
        .windows(2)
        .map(|pair| Span::new(pair[0].span.end, pair[1].span.start))
        .collect();
    let tail = legal[legal.len() - 1].span.end;

    let mut gaps = gaps.into_iter();
    for citation in legal {
        entries.push(CitationEntry::Legal(citation));
        if let Some(gap) = gaps.next() {
            entries.extend(scan(gap.start, gap.end));
        }
    }

    if options.scan_edges {
        entries.extend(scan(tail, text.len()));
    }

    debug!(
        slog_scope::logger(),
        "Footnote {}: {} citation(s) after merge",
        footnote.num,
        entries.len()
    );
    Ok(entries)
}
