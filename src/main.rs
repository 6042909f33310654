//! `main.rs` contains the command-line interface for bookpull. It collects the
//! values and options, sets up the logger, assembles the configuration, and
//! passes the configuration to the main function.
#[macro_use]
extern crate slog;

use ansi_term::Color;
use bookpull::config::{
    BookpullCommand, BookpullConfig, CiteConfig, ExtractConfig, Output, ReportConfig,
};
use clap::{crate_version, value_parser, App, Arg, SubCommand};
use slog::{debug, Drain, Level};
use std::{fs::OpenOptions, process, sync::Mutex};

fn main() {
    // Get the command-line arguments and options
    let matches = App::new("bookpull")
        .version(crate_version!())
        .about("Pulls the citations out of a law-review manuscript's footnotes")
        .subcommand_negates_reqs(true)
        .arg(
            Arg::with_name("input")
                .value_name("DOCX FILE")
                .help("The .docx manuscript to read")
                .index(1)
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .value_name("OUTPUT FILE")
                .help("The .csv or .json output (blank outputs CSV to terminal)")
                .index(2)
                .required(false),
        )
        .arg(
            Arg::with_name("citations")
                .short('c')
                .long("citations")
                .value_name("JSON FILE")
                .help("A JSON file of citations found by another tool"),
        )
        .arg(
            Arg::with_name("user_reporters")
                .short('u')
                .long("user_reporters")
                .value_name("REPORTER FILE")
                .help("A RON file containing user-provided reporter names"),
        )
        .arg(
            Arg::with_name("offset")
                .short('o')
                .long("offset")
                .value_name("NUMBER")
                .help("The offset for counting footnotes")
                .default_value("0")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::with_name("edges")
                .short('e')
                .long("edges")
                .takes_value(false)
                .help("Also look for links before the first and after the last citation"),
        )
        .arg(
            Arg::with_name("all_links")
                .short('a')
                .long("all_links")
                .takes_value(false)
                .help("Keep every link between citations, not just the first"),
        )
        .arg(
            Arg::with_name("debug")
                .short('d')
                .long("debug")
                .takes_value(false)
                .help("Outputs debug log to bookpull-log.json")
                .hidden_short_help(true)
                .hidden_long_help(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short('v')
                .long("verbose")
                .value_name("NUMBER")
                .help("Verbosity level between 0 and 5")
                .hidden_short_help(true)
                .hidden_long_help(true)
                .default_value("1"),
        )
        .subcommand(SubCommand::with_name("ur").about("For creating a blank user-reporters file"))
        .get_matches();

    // Setup the logger.
    //
    // If the debug flag is set, the log is also output to a file
    // `bookpull-log.json`.
    let debug = matches.is_present("debug");
    let min_log_level = match matches.value_of("verbose") {
        Some("0") => Level::Critical,
        Some("1") => Level::Error,
        Some("2") => Level::Warning,
        Some("3") => Level::Info,
        Some("4") => Level::Debug,
        Some("5") => Level::Trace,
        _ => Level::Info,
    };

    let term_decorator = slog_term::TermDecorator::new().build();
    let term_drain = slog_term::CompactFormat::new(term_decorator).build().fuse();
    let term_drain = term_drain.filter_level(min_log_level).fuse();

    let _guard: slog_scope::GlobalLoggerGuard = if debug {
        // Setup the file AND terminal loggers
        let log_file = match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open("./bookpull-log.json")
        {
            Ok(f) => f,
            Err(e) => {
                eprintln!(
                    "{} Unable to create bookpull-log.json—{}",
                    Color::Red.paint("ERRO"),
                    e
                );
                process::exit(1);
            }
        };
        let file_drain = slog_json::Json::new(log_file)
            .set_pretty(true)
            .add_default_keys()
            .build()
            .fuse();
        let file_drain = file_drain.filter_level(Level::Trace).fuse();
        let dual_logger = slog::Logger::root(
            Mutex::new(slog::Duplicate(term_drain, file_drain)).fuse(),
            o!("version" => crate_version!()),
        );
        slog_scope::set_global_logger(dual_logger)
    } else {
        // Setup just the terminal logger
        let term_logger = slog::Logger::root(
            Mutex::new(term_drain).fuse(),
            o!("version" => crate_version!()),
        );
        slog_scope::set_global_logger(term_logger)
    };

    debug!(slog_scope::logger(), "Logger setup");

    // Subcommands
    let config = if matches.subcommand_name() == Some("ur") {
        BookpullConfig::new(BookpullCommand::NewUserReporterFile, None, None, None, None)
    } else {
        // Files
        let input = matches.value_of("input").unwrap_or_default();
        let output = matches.value_of("output");

        // Citation options
        let offset = matches.get_one::<u32>("offset").copied().unwrap_or(0);
        let citations = matches.value_of("citations");
        let user_reporters = matches.value_of("user_reporters");
        let scan_edges = matches.is_present("edges");
        let all_links = matches.is_present("all_links");

        if citations.is_some() && user_reporters.is_some() {
            eprintln!(
                "{} User reporters are ignored when citations come from {}",
                Color::Yellow.paint("WARN"),
                Color::Blue.paint(citations.unwrap_or_default())
            );
        }

        // Determine the output
        let output_option = match Output::from_path(output) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("{} {}", Color::Red.paint("ERRO"), e);
                process::exit(1);
            }
        };

        // Create the configuration
        let extract_config = ExtractConfig::new(input, offset);
        let cite_config = CiteConfig::new(citations, user_reporters, scan_edges, all_links);
        let report_config = ReportConfig::new(output);
        BookpullConfig::new(
            BookpullCommand::Main,
            Some(output_option),
            Some(extract_config),
            Some(cite_config),
            Some(report_config),
        )
    };

    // Run the program.
    if let Err(e) = bookpull::bookpull(config) {
        error!(slog_scope::logger(), "{}", e);
        eprintln!("{} {}", Color::Red.paint("ERRO"), e);
        process::exit(1);
    }
}
