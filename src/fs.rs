//! Functions for interacting with the file system (except .docx).

pub mod file_contents;

use ansi_term::Color;
use file_contents::BLANK_USER_REPORTERS_CONTENTS;
use slog::debug;
use std::{fs, path::Path};

/// Load a file into a string.
///
/// This function is used to load both the citations JSON and user-reporters
/// RON files into strings, which can then be passed to the main function.
pub fn load_file(path: &Path) -> Result<String, String> {
    debug!(
        slog_scope::logger(),
        "Loading file {}...",
        path.to_string_lossy()
    );

    match fs::read_to_string(path) {
        Ok(r) => {
            debug!(
                slog_scope::logger(),
                "File {} loaded.",
                path.to_string_lossy()
            );
            Ok(r)
        }
        Err(e) => {
            let err_msg = format!("error reading the file {}—{}", path.to_string_lossy(), e);
            Err(err_msg)
        }
    }
}

/// Save bytes in a file.
///
/// This function saves the rendered report.
pub fn save_file(path: &Path, output: &[u8]) -> Result<(), String> {
    debug!(slog_scope::logger(), "Saving {}...", path.to_string_lossy());
    eprintln!(
        "{} Saving {}...",
        Color::Green.paint("INFO"),
        Color::Blue.paint(path.to_string_lossy())
    );

    match fs::write(path, output) {
        Ok(_) => {
            debug!(
                slog_scope::logger(),
                "File {} saved.",
                path.to_string_lossy()
            );
            Ok(())
        }
        Err(e) => {
            let err_msg = format!("error writing the file {}—{}", path.to_string_lossy(), e);
            Err(err_msg)
        }
    }
}

/// Create a blank user-reporters file.
///
/// Creates a blank user-reporters file that users can then fill in with their
/// own reporters.
pub fn new_user_reporters_ron() -> Result<(), String> {
    let path = "blank-user-reporters.ron";
    eprintln!(
        "{} Creating blank user-reporters file ({})",
        Color::Green.paint("INFO"),
        Color::Blue.paint(path)
    );

    fs::write(path, BLANK_USER_REPORTERS_CONTENTS)
        .map_err(|e| format!("unable to write the blank user-reporters file—{}", e))
}
