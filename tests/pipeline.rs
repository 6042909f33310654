use bookpull::{
    cite::merge::MergeOptions,
    docx::read_footnotes,
    find_citations,
    recognize::{ExternalCitations, PatternRecognizer},
    report::write_csv,
};
use std::{fs::File, io::Write, path::Path};
use zip::{write::FileOptions, ZipWriter};

const FOOTNOTES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:footnotes xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:footnote w:type="separator" w:id="-1"><w:p><w:r><w:separator/></w:r></w:p></w:footnote><w:footnote w:type="continuationSeparator" w:id="0"><w:p><w:r><w:continuationSeparator/></w:r></w:p></w:footnote><w:footnote w:id="1"><w:p><w:r><w:footnoteRef/></w:r><w:r><w:t xml:space="preserve"> Katz v. United States, 389 U.S. 347 (1967).</w:t></w:r></w:p></w:footnote><w:footnote w:id="2"><w:p><w:r><w:footnoteRef/></w:r><w:r><w:t xml:space="preserve"> See Randy E. Barnett, Kavanaugh Testimony, Part 1: On Originalism, Volokh Conspiracy (Sept. 14, 2018), </w:t></w:r><w:hyperlink r:id="rId1"><w:r><w:t>https://reason.com/volokh/2018/09/14/kavanaugh-testimony-part-1-on-originalis</w:t></w:r></w:hyperlink><w:r><w:t xml:space="preserve"> [https://perma.cc/WA8R-3SAV].</w:t></w:r></w:p></w:footnote></w:footnotes>"#;

fn write_docx(path: &Path, footnotes: Option<&str>) {
    let mut zip = ZipWriter::new(File::create(path).unwrap());
    zip.start_file("word/document.xml", FileOptions::default())
        .unwrap();
    zip.write_all(b"<w:document/>").unwrap();
    if let Some(xml) = footnotes {
        zip.start_file("word/footnotes.xml", FileOptions::default())
            .unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

#[test]
fn docx_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let docx = dir.path().join("article.docx");
    write_docx(&docx, Some(FOOTNOTES_XML));

    let footnotes = read_footnotes(&docx, 0).unwrap();
    assert_eq!(footnotes.len(), 2);

    let recognizer = PatternRecognizer::new(None).unwrap();
    let rows = find_citations(footnotes, &recognizer, MergeOptions::default()).unwrap();
    let mut out = Vec::new();
    write_csv(&rows, &mut out).unwrap();
    let csv = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines,
        vec![
            "footnote,citation,type,source,notes",
            "1.1,389 U.S. 347 (1967),Case,389 U.S. 347,",
            "2.1,\"See Randy E. Barnett, Kavanaugh Testimony, Part 1: On Originalism, Volokh Conspiracy (Sept. 14, 2018), https://reason.com/volokh/2018/09/14/kavanaugh-testimony-part-1-on-originalis [https://perma.cc/WA8R-3SAV]\",Link,,https://reason.com/volokh/2018/09/14/kavanaugh-testimony-part-1-on-originalis",
        ]
    );
}

#[test]
fn offset_and_external_citations() {
    let dir = tempfile::tempdir().unwrap();
    let docx = dir.path().join("article.docx");
    write_docx(&docx, Some(FOOTNOTES_XML));

    let footnotes = read_footnotes(&docx, 30).unwrap();
    assert_eq!(footnotes[0].num, 31);

    // "389 U.S. 347" in footnote 31, counted in characters.
    let recognizer = ExternalCitations::from_json(
        r#"{ "footnotes": { "31": [{ "start": 23, "end": 35, "kind": "FullCaseCitation", "normalized": "389 U.S. 347" }] } }"#,
    )
    .unwrap();
    let rows = find_citations(footnotes, &recognizer, MergeOptions::default()).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].footnote, "31.1");
    assert_eq!(rows[0].citation, "389 U.S. 347");
    assert_eq!(rows[1].footnote, "32.1");
    assert_eq!(
        rows[1].permalink.as_deref(),
        Some("https://perma.cc/WA8R-3SAV")
    );
}

#[test]
fn no_footnotes() {
    let dir = tempfile::tempdir().unwrap();
    let docx = dir.path().join("plain.docx");
    write_docx(&docx, None);

    assert_eq!(
        read_footnotes(&docx, 0).unwrap_err(),
        "No footnotes found in document."
    );
}

#[test]
fn not_a_docx() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("notes.docx");
    std::fs::write(&file, "just some text").unwrap();

    assert!(read_footnotes(&file, 0)
        .unwrap_err()
        .contains("is not a .docx file"));
}
