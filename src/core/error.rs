//! Error types for reading input text

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The input file could not be turned into text.
#[derive(Error, Debug)]
pub enum InputUnavailable {
    #[error("{} not found: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    NotUtf8 {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InputUnavailable {
    /// Classify an I/O error raised while reading `path`
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        let path = path.to_path_buf();
        match error.kind() {
            io::ErrorKind::NotFound => InputUnavailable::NotFound {
                path,
                source: error,
            },
            io::ErrorKind::InvalidData => InputUnavailable::NotUtf8 {
                path,
                source: error,
            },
            _ => InputUnavailable::Unreadable {
                path,
                source: error,
            },
        }
    }

    /// The path that failed to load
    pub fn path(&self) -> &Path {
        match self {
            InputUnavailable::NotFound { path, .. }
            | InputUnavailable::Unreadable { path, .. }
            | InputUnavailable::NotUtf8 { path, .. } => path,
        }
    }

    /// The underlying I/O failure
    pub fn cause(&self) -> &io::Error {
        match self {
            InputUnavailable::NotFound { source, .. }
            | InputUnavailable::Unreadable { source, .. }
            | InputUnavailable::NotUtf8 { source, .. } => source,
        }
    }
}
