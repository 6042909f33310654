//! Contains the constants for file contents.

/// Contents of the blank user-reporters file.
pub static BLANK_USER_REPORTERS_CONTENTS: &str = r#"// Enter your own reporter abbreviations into this document.
// All entries must come between the two curly brackets, which start and end the
// file. Each entry should include two quoted strings, separated by a colon. The
// first string is the reporter as it is written in your footnotes. The second
// string is the form used in the normalized citation. Put each reporter on a
// separate line, with commas after every line. Below is an example:
//
// {
//  "Wash. App.":"Wash. App.",
//  "Wn. App.":"Wash. App.",
// }
//
// There is also a placeholder example below. Feel free to replace that with
// your own reporters.

{
    "Reporter As Written":"Normalized Reporter",
}
"#;
