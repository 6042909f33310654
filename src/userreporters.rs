//! This module contains functionality related to user-reporters files.

use ron::de::from_str;
use slog::debug;
use std::collections::HashMap;

/// Reporter spellings supplied by the user, mapped to their normalized form.
pub type UserReporters = HashMap<String, String>;

/// Create the user-reporters list.
pub fn build_user_reporters(input: &str) -> Result<UserReporters, String> {
    match from_str(input) {
        Ok(u) => {
            debug!(slog_scope::logger(), "User reporters file parsed");
            Ok(u)
        }
        Err(e) => {
            let err_msg = format!("error deserializing the user reporters file—{}", e);
            Err(err_msg)
        }
    }
}
