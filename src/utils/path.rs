//! Helpers for user-supplied filesystem paths.

use std::path::{Path, PathBuf};

/// Expand a leading `~/` to the current user's home directory.
pub fn expand_tilde(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        home.join(rest)
    } else {
        PathBuf::from(raw)
    }
}

pub fn is_absolute(raw: &str) -> bool {
    Path::new(raw).is_absolute()
}
