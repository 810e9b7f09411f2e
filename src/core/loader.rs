//! Input loading
//!
//! Reads a whole file as strict UTF-8. Failures are either returned as
//! [`InputUnavailable`] or reported to stderr and replaced by an empty string.

use std::fs;
use std::path::Path;

use crate::core::error::InputUnavailable;

/// Read the entire file at `path` as UTF-8 text
pub fn load_content_checked(path: &Path) -> Result<String, InputUnavailable> {
    fs::read_to_string(path).map_err(|e| InputUnavailable::from_io(path, e))
}

/// Read the entire file at `path`, reporting failures on stderr.
///
/// Returns an empty string when the file cannot be read. Callers treat an
/// empty result as "nothing to do".
pub fn load_content(path: &Path) -> String {
    match load_content_checked(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e.cause());
            String::new()
        }
    }
}
