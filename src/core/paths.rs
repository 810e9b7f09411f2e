//! Input path resolution

use std::path::{Path, PathBuf};

/// File read when no input path is given
pub const DEFAULT_INPUT_FILE: &str = "declaration.txt";

/// Resolve the default input file, located next to the running executable.
///
/// Falls back to a path relative to the working directory when the
/// executable location is unknown.
pub fn default_input_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(input_beside))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE))
}

/// The default input file within `dir`
pub fn input_beside(dir: &Path) -> PathBuf {
    dir.join(DEFAULT_INPUT_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_beside() {
        assert_eq!(
            input_beside(Path::new("/opt/wordtint")),
            PathBuf::from("/opt/wordtint/declaration.txt")
        );
    }

    #[test]
    fn test_default_input_path_file_name() {
        let path = default_input_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(DEFAULT_INPUT_FILE)
        );
    }
}
