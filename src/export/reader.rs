//! Per-file reading with failure classification

use super::format::{not_found_message, read_error_message};
use std::fs;
use std::io;

/// Why an entry's content could not be read
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// Path does not resolve to an existing file
    #[error("file not found: {path}")]
    NotFound { path: String },

    /// Any other open/read/decode failure (permission, invalid UTF-8, directory...)
    #[error("failed to read {path}: {source}")]
    Other {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    fn from_io(path: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_string(),
            },
            _ => Self::Other {
                path: path.to_string(),
                source: err,
            },
        }
    }

    /// Text written into the bundle in place of the file content
    pub fn substitute(&self) -> String {
        match self {
            Self::NotFound { path } => not_found_message(path),
            Self::Other { path, source } => read_error_message(path, &source.to_string()),
        }
    }
}

/// Read the full contents of `path` as UTF-8
///
/// The file handle is dropped before returning, whatever the outcome.
pub fn read_entry(path: &str) -> Result<String, ReadError> {
    fs::read_to_string(path).map_err(|e| ReadError::from_io(path, e))
}

/// Read `path`, falling back to the substituted message on failure
pub fn read_or_substitute(path: &str) -> (String, Option<ReadError>) {
    match read_entry(path) {
        Ok(content) => (content, None),
        Err(err) => (err.substitute(), Some(err)),
    }
}
