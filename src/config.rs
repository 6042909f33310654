//! The structures and functions for configuration. Must be accessible to main.

use crate::cite::merge::MergeOptions;

/// The overall options.
pub struct BookpullConfig<'a> {
    pub command: BookpullCommand,
    pub output: Option<Output>,
    pub extract_config: Option<ExtractConfig<'a>>,
    pub cite_config: Option<CiteConfig<'a>>,
    pub report_config: Option<ReportConfig<'a>>,
}

impl BookpullConfig<'_> {
    pub fn new<'a>(
        command: BookpullCommand,
        output: Option<Output>,
        extract_config: Option<ExtractConfig<'a>>,
        cite_config: Option<CiteConfig<'a>>,
        report_config: Option<ReportConfig<'a>>,
    ) -> BookpullConfig<'a> {
        BookpullConfig {
            command,
            output,
            extract_config,
            cite_config,
            report_config,
        }
    }
}

/// The types of subcommands.
#[derive(PartialEq, Eq, Debug)]
pub enum BookpullCommand {
    Main,
    NewUserReporterFile,
}

/// Output options
#[derive(PartialEq, Eq, Debug)]
pub enum Output {
    StandardOut,
    Csv,
    Json,
}

impl Output {
    /// Determine the output from the output file's extension.
    ///
    /// No file means standard out. Anything other than `.csv` or `.json` is
    /// an error.
    pub fn from_path(path: Option<&str>) -> Result<Output, String> {
        match path {
            None => Ok(Output::StandardOut),
            Some(f) if f.ends_with(".csv") => Ok(Output::Csv),
            Some(f) if f.ends_with(".json") => Ok(Output::Json),
            Some(f) => Err(format!(
                "The output file must have a .csv or .json extension. You used {}",
                f
            )),
        }
    }
}

/// Footnote-extraction configuration.
pub struct ExtractConfig<'a> {
    pub input: &'a str,
    pub offset: u32,
}

impl ExtractConfig<'_> {
    pub fn new(input: &str, offset: u32) -> ExtractConfig {
        ExtractConfig { input, offset }
    }
}

/// Citation-discovery configuration.
pub struct CiteConfig<'a> {
    pub citations: Option<&'a str>,
    pub user_reporters: Option<&'a str>,
    pub merge: MergeOptions,
}

impl CiteConfig<'_> {
    pub fn new<'a>(
        citations: Option<&'a str>,
        user_reporters: Option<&'a str>,
        scan_edges: bool,
        all_links: bool,
    ) -> CiteConfig<'a> {
        CiteConfig {
            citations,
            user_reporters,
            merge: MergeOptions {
                scan_edges,
                all_links,
            },
        }
    }
}

/// Report configuration.
pub struct ReportConfig<'a> {
    pub output: Option<&'a str>,
}

impl ReportConfig<'_> {
    pub fn new(output: Option<&str>) -> ReportConfig {
        ReportConfig { output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_from_extension() {
        assert_eq!(Output::from_path(None), Ok(Output::StandardOut));
        assert_eq!(Output::from_path(Some("cites.csv")), Ok(Output::Csv));
        assert_eq!(Output::from_path(Some("build/cites.json")), Ok(Output::Json));
        assert!(Output::from_path(Some("cites.xlsx"))
            .unwrap_err()
            .contains("cites.xlsx"));
    }
}
