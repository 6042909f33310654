//! Reading footnotes out of a `.docx` file.

use crate::cite::Footnote;
use lazy_static::lazy_static;
use quick_xml::{events::Event, Reader};
use regex::Regex;
use slog::{debug, trace};
use std::{io::Read, path::Path};
use zip::ZipArchive;

lazy_static! {
    /// Regex for runs of whitespace, including non-breaking spaces.
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Footnote types that hold layout rather than content.
const LAYOUT_TYPES: [&str; 3] = ["separator", "continuationSeparator", "continuationNotice"];

/// Read the footnotes from the `.docx` file at `path`.
///
/// Footnotes are numbered from `offset + 1`.
pub fn read_footnotes(path: &Path, offset: u32) -> Result<Vec<Footnote>, String> {
    debug!(slog_scope::logger(), "Reading {:?}...", path);

    let xml = read_footnotes_xml(path)?;
    let footnotes = footnotes_from_xml(&xml, offset)?;

    debug!(
        slog_scope::logger(),
        "{:?} read ({} footnotes).",
        path,
        footnotes.len()
    );
    Ok(footnotes)
}

/// Pull `word/footnotes.xml` out of the `.docx` archive.
fn read_footnotes_xml(path: &Path) -> Result<String, String> {
    // Load the .docx file
    let docx_file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => return Err(format!("error opening {}—{}", path.to_string_lossy(), e)),
    };

    // Create a ZipArchive from the .docx file
    let mut docx = match ZipArchive::new(docx_file) {
        Ok(z) => z,
        Err(e) => {
            return Err(format!(
                "{} is not a .docx file—{}",
                path.to_string_lossy(),
                e
            ))
        }
    };

    let mut fns = String::new();
    match docx.by_name("word/footnotes.xml") {
        Ok(mut z) => {
            if let Err(e) = z.read_to_string(&mut fns) {
                return Err(format!("error reading footnotes.xml—{}", e));
            }
        }
        Err(_) => return Err("No footnotes found in document.".to_string()),
    }

    Ok(fns)
}

/// Build the footnotes from the contents of `footnotes.xml`.
///
/// The text of a footnote is the text of every `w:t` element inside it,
/// including runs nested in hyperlinks. Whitespace is collapsed to single
/// spaces and trimmed. Separator footnotes and footnotes with no text are
/// dropped; the rest are numbered consecutively.
pub fn footnotes_from_xml(xml: &str, offset: u32) -> Result<Vec<Footnote>, String> {
    let mut reader = Reader::from_str(xml);

    let mut texts: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_footnote = false;
    let mut skip = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:footnote" => {
                    in_footnote = true;
                    current.clear();
                    skip = match e.try_get_attribute("w:type") {
                        Ok(Some(t)) => {
                            let t = t.unescape_value().unwrap_or_default();
                            LAYOUT_TYPES.iter().any(|l| *l == t)
                        }
                        _ => false,
                    };
                }
                b"w:t" if in_footnote => in_text = true,
                _ => {}
            },
            Ok(Event::Text(e)) if in_text && !skip => match e.unescape() {
                Ok(t) => current.push_str(&t),
                Err(err) => {
                    return Err(format!(
                        "error reading footnotes.xml at position {}—{}",
                        reader.buffer_position(),
                        err
                    ))
                }
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:footnote" => {
                    if !skip {
                        let text = WHITESPACE.replace_all(current.trim(), " ");
                        if !text.is_empty() {
                            texts.push(text.into_owned());
                        } else {
                            trace!(slog_scope::logger(), "Dropping empty footnote");
                        }
                    }
                    in_footnote = false;
                    skip = false;
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(format!(
                    "error reading footnotes.xml at position {}—{}",
                    reader.buffer_position(),
                    e
                ))
            }
            _ => {}
        }
    }

    // Every number from `offset + 1` to `offset + count` has to fit.
    let count = u32::try_from(texts.len()).unwrap_or(u32::MAX);
    if offset.checked_add(count).is_none() {
        return Err(format!(
            "the footnote offset {} is too large for {} footnotes",
            offset, count
        ));
    }

    Ok(texts
        .into_iter()
        .zip(1..)
        .map(|(text, i)| Footnote::new(offset + i, text))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:footnotes xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">{}</w:footnotes>"#,
            body
        )
    }

    const SEPARATORS: &str = r#"<w:footnote w:type="separator" w:id="-1"><w:p><w:r><w:separator/></w:r></w:p></w:footnote><w:footnote w:type="continuationSeparator" w:id="0"><w:p><w:r><w:continuationSeparator/></w:r></w:p></w:footnote>"#;

    #[test]
    fn small_doc() {
        let xml = wrap(&format!(
            r#"{}<w:footnote w:id="1"><w:p><w:r><w:footnoteRef/></w:r><w:r><w:t xml:space="preserve"> Note 1</w:t></w:r></w:p></w:footnote><w:footnote w:id="2"><w:p><w:r><w:t>Note 2</w:t></w:r></w:p></w:footnote><w:footnote w:id="3"><w:p><w:r><w:t xml:space="preserve">This is the </w:t></w:r><w:r><w:t>third footnote</w:t></w:r></w:p></w:footnote>"#,
            SEPARATORS
        ));
        let footnotes = footnotes_from_xml(&xml, 0).unwrap();
        assert_eq!(
            footnotes,
            vec![
                Footnote::new(1, "Note 1"),
                Footnote::new(2, "Note 2"),
                Footnote::new(3, "This is the third footnote"),
            ]
        );
    }

    #[test]
    fn separators_with_text_are_skipped() {
        let xml = wrap(r#"<w:footnote w:type="continuationNotice" w:id="0"><w:p><w:r><w:t>continued</w:t></w:r></w:p></w:footnote><w:footnote w:id="1"><w:p><w:r><w:t>Real</w:t></w:r></w:p></w:footnote>"#);
        assert_eq!(
            footnotes_from_xml(&xml, 0).unwrap(),
            vec![Footnote::new(1, "Real")]
        );
    }

    #[test]
    fn empty_footnotes_dropped_and_renumbered() {
        let xml = wrap(r#"<w:footnote w:id="1"><w:p><w:r><w:t>First</w:t></w:r></w:p></w:footnote><w:footnote w:id="2"><w:p><w:r><w:t xml:space="preserve">   </w:t></w:r></w:p></w:footnote><w:footnote w:id="3"><w:p/></w:footnote><w:footnote w:id="4"><w:p><w:r><w:t>Second</w:t></w:r></w:p></w:footnote>"#);
        assert_eq!(
            footnotes_from_xml(&xml, 0).unwrap(),
            vec![Footnote::new(1, "First"), Footnote::new(2, "Second")]
        );
    }

    #[test]
    fn hyperlink_runs_entities_and_whitespace() {
        let xml = wrap(
            "<w:footnote w:id=\"1\"><w:p><w:r><w:t xml:space=\"preserve\">Volokh (2018), </w:t></w:r><w:hyperlink r:id=\"rId1\"><w:r><w:t>https://reason.com/a?b=1&amp;c=2</w:t></w:r></w:hyperlink><w:r><w:t xml:space=\"preserve\"> at\u{a0}4</w:t></w:r></w:p></w:footnote>",
        );
        assert_eq!(
            footnotes_from_xml(&xml, 0).unwrap(),
            vec![Footnote::new(
                1,
                "Volokh (2018), https://reason.com/a?b=1&c=2 at 4"
            )]
        );
    }

    #[test]
    fn offset() {
        let xml = wrap(r#"<w:footnote w:id="1"><w:p><w:r><w:t>A</w:t></w:r></w:p></w:footnote><w:footnote w:id="2"><w:p><w:r><w:t>B</w:t></w:r></w:p></w:footnote>"#);
        let footnotes = footnotes_from_xml(&xml, 10).unwrap();
        assert_eq!(footnotes[0].num, 11);
        assert_eq!(footnotes[1].num, 12);
    }

    #[test]
    fn offset_too_large() {
        let xml = wrap(r#"<w:footnote w:id="1"><w:p><w:r><w:t>A</w:t></w:r></w:p></w:footnote><w:footnote w:id="2"><w:p><w:r><w:t>B</w:t></w:r></w:p></w:footnote>"#);
        assert_eq!(
            footnotes_from_xml(&xml, u32::MAX).unwrap_err(),
            "the footnote offset 4294967295 is too large for 2 footnotes"
        );
        let last = footnotes_from_xml(&xml, u32::MAX - 2).unwrap();
        assert_eq!(last[1].num, u32::MAX);
    }

    #[test]
    fn malformed_xml() {
        let xml = wrap(r#"<w:footnote w:id="1"><w:p><w:r><w:t>A</w:r></w:p></w:footnote>"#);
        assert!(footnotes_from_xml(&xml, 0)
            .unwrap_err()
            .starts_with("error reading footnotes.xml"));
    }

    #[test]
    fn missing_file() {
        let err = read_footnotes(Path::new("./does-not-exist.docx"), 0).unwrap_err();
        assert!(err.starts_with("error opening"));
    }
}
