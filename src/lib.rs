//! Contains the main bookpull function. Pulls the footnotes out of a `.docx`
//! manuscript, finds the citations in each, and writes one row per citation.

pub mod cite;
pub mod config;
pub mod docx;
mod fs;
pub mod recognize;
pub mod report;
pub mod userreporters;

use ansi_term::Color;
use cite::{
    merge::{merge, MergeOptions},
    CitationEntry, Footnote,
};
use config::{BookpullCommand, BookpullConfig, Output};
use fs::load_file;
use recognize::{ExternalCitations, PatternRecognizer, Recognizer};
use report::Row;
use slog::{debug, error, o};
use std::{path::Path, process};
use userreporters::build_user_reporters;

/// The main bookpull function.
pub fn bookpull(config: BookpullConfig) -> Result<(), String> {
    // Check subcommands.
    if config.command == BookpullCommand::NewUserReporterFile {
        debug!(slog_scope::logger(), "Creating blank user-reporters file");
        return fs::new_user_reporters_ron();
    }

    eprintln!("{} Starting bookpull...", Color::Green.paint("INFO"));

    let (extract_config, cite_config, report_config, output) = match (
        config.extract_config,
        config.cite_config,
        config.report_config,
        config.output,
    ) {
        (Some(e), Some(c), Some(r), Some(o)) => (e, c, r, o),
        _ => return Err("incomplete configuration".to_string()),
    };

    // Load the recognizer: external citations if given, otherwise the
    // built-in patterns with any user reporters.
    let recognizer: Box<dyn Recognizer> = match cite_config.citations {
        Some(c) => {
            let citations = exit_on_err("Citations load error", || {
                slog_scope::scope(&slog_scope::logger().new(o!("fn" => "load_file()")), || {
                    load_file(Path::new(c))
                })
                .and_then(|s| ExternalCitations::from_json(&s))
            });
            Box::new(citations)
        }
        None => {
            let user_reporters = match cite_config.user_reporters {
                Some(u) => Some(exit_on_err("User reporters load error", || {
                    slog_scope::scope(&slog_scope::logger().new(o!("fn" => "load_file()")), || {
                        load_file(Path::new(u))
                    })
                    .and_then(|s| build_user_reporters(&s))
                })),
                None => None,
            };
            let recognizer = exit_on_err("Citation pattern error", || {
                PatternRecognizer::new(user_reporters.as_ref())
            });
            Box::new(recognizer)
        }
    };

    // Pull the footnotes
    eprintln!("{} Reading footnotes...", Color::Green.paint("INFO"));
    let footnotes = exit_on_err("Footnote extraction error", || {
        slog_scope::scope(
            &slog_scope::logger().new(o!("fn" => "read_footnotes()")),
            || docx::read_footnotes(Path::new(extract_config.input), extract_config.offset),
        )
    });

    // Find and merge the citations
    eprintln!("{} Finding citations...", Color::Green.paint("INFO"));
    let rows = exit_on_err("Citation error", || {
        slog_scope::scope(&slog_scope::logger().new(o!("fn" => "find_citations()")), || {
            find_citations(footnotes, recognizer.as_ref(), cite_config.merge)
        })
    });

    // Write the report
    let mut rendered: Vec<u8> = Vec::new();
    let written = match output {
        Output::Json => report::write_json(&rows, &mut rendered),
        Output::Csv | Output::StandardOut => report::write_csv(&rows, &mut rendered),
    };
    exit_on_err("Output error", || written);

    match report_config.output {
        Some(path) if output != Output::StandardOut => {
            exit_on_err("Output error", || fs::save_file(Path::new(path), &rendered))
        }
        _ => print!("{}", String::from_utf8_lossy(&rendered)),
    }

    eprintln!(
        "{} Done ({} citations)",
        Color::Green.paint("INFO"),
        rows.len()
    );
    Ok(())
}

/// Recognize, merge, and flatten the citations in every footnote.
///
/// A recognizer that reports an unknown citation kind or a span outside its
/// footnote stops the whole run.
pub fn find_citations(
    footnotes: Vec<Footnote>,
    recognizer: &dyn Recognizer,
    options: MergeOptions,
) -> Result<Vec<Row>, String> {
    debug!(
        slog_scope::logger(),
        "Finding citations in {} footnotes...",
        footnotes.len()
    );

    let mut entries_by_footnote: Vec<(Footnote, Vec<CitationEntry>)> =
        Vec::with_capacity(footnotes.len());
    for footnote in footnotes {
        let legal = recognizer
            .recognize(&footnote)
            .map_err(|e| format!("recognizer failed on footnote {}—{}", footnote.num, e))?;
        let entries = merge(&footnote, legal, options).map_err(|e| e.to_string())?;
        entries_by_footnote.push((footnote, entries));
    }

    report::build_rows(&entries_by_footnote).map_err(|e| e.to_string())
}

/// Run `f`, logging and exiting on an error.
fn exit_on_err<T, F>(context: &str, f: F) -> T
where
    F: FnOnce() -> Result<T, String>,
{
    match f() {
        Ok(t) => t,
        Err(e) => {
            error!(slog_scope::logger(), "{}: {}", context, e);
            eprintln!("{} {}: {}", Color::Red.paint("ERRO"), context, e);
            process::exit(1);
        }
    }
}
