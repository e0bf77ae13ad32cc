//! Error types for Sentir operations.
//!
//! The system distinguishes exactly two failure families: fatal I/O failures
//! on a named file, and checked indexed access into a [`ByteString`].
//! Malformed CSV records are not errors — they are skipped by policy.
//!
//! [`ByteString`]: crate::primitives::ByteString

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Main error type for Sentir operations.
///
/// # Examples
///
/// ```
/// use sentir::error::SentirError;
///
/// let err = SentirError::IndexOutOfRange { index: 9, len: 5 };
/// assert!(err.to_string().contains("index out of range"));
/// ```
#[derive(Debug)]
pub enum SentirError {
    /// A named file could not be opened, read, or written. Fatal to the run.
    Io {
        /// Path of the file the stage was operating on
        path: PathBuf,
        /// Underlying OS error
        source: io::Error,
    },

    /// Checked indexed access past the end of a string.
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Length of the string
        len: usize,
    },

    /// Model snapshot could not be encoded or decoded.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl SentirError {
    /// Wraps an OS error with the path of the file being processed.
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        SentirError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for SentirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentirError::Io { path, source } => {
                write!(f, "I/O failure on '{}': {source}", path.display())
            }
            SentirError::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: {index} (string length {len})")
            }
            SentirError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            SentirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SentirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SentirError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<&str> for SentirError {
    fn from(msg: &str) -> Self {
        SentirError::Other(msg.to_string())
    }
}

impl From<String> for SentirError {
    fn from(msg: String) -> Self {
        SentirError::Other(msg)
    }
}

/// Result type alias for Sentir operations.
pub type Result<T> = std::result::Result<T, SentirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_file() {
        let err = SentirError::io(
            Path::new("data/train.csv"),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("train.csv"), "message was: {msg}");
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err = SentirError::io(
            Path::new("out.csv"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn index_error_reports_position_and_length() {
        let err = SentirError::IndexOutOfRange { index: 12, len: 3 };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn string_conversions_produce_other() {
        let from_str: SentirError = "boom".into();
        assert_eq!(from_str.to_string(), "boom");

        let from_string: SentirError = String::from("bang").into();
        assert_eq!(from_string.to_string(), "bang");
    }
}
