//! Turning merged citations into report rows and writing them out.

use crate::cite::{CitationEntry, CitationKind, CiteError, Footnote};
use serde::Serialize;
use slog::debug;
use std::io::Write;

/// The CSV column header.
pub const HEADER: [&str; 5] = ["footnote", "citation", "type", "source", "notes"];

/// The type column of a row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RowType {
    Case,
    Journal,
    Statute,
    Id,
    Supra,
    Unknown,
    Link,
}

impl RowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowType::Case => "Case",
            RowType::Journal => "Journal",
            RowType::Statute => "Statute",
            RowType::Id => "Id",
            RowType::Supra => "Supra",
            RowType::Unknown => "Unknown",
            RowType::Link => "Link",
        }
    }
}

impl From<CitationKind> for RowType {
    fn from(kind: CitationKind) -> Self {
        match kind {
            CitationKind::Case => RowType::Case,
            CitationKind::Journal => RowType::Journal,
            CitationKind::Statute => RowType::Statute,
            CitationKind::Id => RowType::Id,
            CitationKind::Supra => RowType::Supra,
            CitationKind::Unknown => RowType::Unknown,
        }
    }
}

/// One citation in the report.
///
/// `detail` is the normalized citation for legal citations and the URL for
/// link citations. The permalink only appears in JSON output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Row {
    pub footnote: String,
    pub citation: String,
    #[serde(rename = "type")]
    pub row_type: RowType,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}

impl Row {
    /// The `source` column: set for legal citations only.
    pub fn source(&self) -> &str {
        match self.row_type {
            RowType::Link => "",
            _ => &self.detail,
        }
    }

    /// The `notes` column: set for link citations only.
    pub fn notes(&self) -> &str {
        match self.row_type {
            RowType::Link => &self.detail,
            _ => "",
        }
    }
}

/// Flatten the merged citations into rows, labeled `<footnote>.<index>`.
pub fn build_rows(
    entries_by_footnote: &[(Footnote, Vec<CitationEntry>)],
) -> Result<Vec<Row>, CiteError> {
    let mut rows = Vec::new();

    for (footnote, entries) in entries_by_footnote {
        for (index, entry) in entries.iter().enumerate() {
            let footnote_label = format!("{}.{}", footnote.num, index + 1);
            let row = match entry {
                CitationEntry::Legal(legal) => Row {
                    footnote: footnote_label,
                    citation: legal.span.slice(footnote.num, &footnote.text)?.to_string(),
                    row_type: legal.kind.into(),
                    detail: legal.normalized.clone(),
                    permalink: None,
                },
                CitationEntry::Link(link) => Row {
                    footnote: footnote_label,
                    citation: link.source_text.clone(),
                    row_type: RowType::Link,
                    detail: link.url.clone(),
                    permalink: link.permalink.clone(),
                },
            };
            rows.push(row);
        }
    }

    debug!(slog_scope::logger(), "{} rows built", rows.len());
    Ok(rows)
}

/// Write the rows as CSV. The header is written even when there are no rows.
pub fn write_csv<W: Write>(rows: &[Row], writer: W) -> Result<(), String> {
    let mut csv = csv::Writer::from_writer(writer);

    let csv_err = |e: csv::Error| format!("error writing CSV—{}", e);
    csv.write_record(HEADER).map_err(csv_err)?;
    for row in rows {
        csv.write_record([
            row.footnote.as_str(),
            row.citation.as_str(),
            row.row_type.as_str(),
            row.source(),
            row.notes(),
        ])
        .map_err(csv_err)?;
    }
    csv.flush().map_err(|e| format!("error writing CSV—{}", e))
}

/// Write the rows as a JSON array.
pub fn write_json<W: Write>(rows: &[Row], writer: W) -> Result<(), String> {
    serde_json::to_writer_pretty(writer, rows).map_err(|e| format!("error writing JSON—{}", e))
}
