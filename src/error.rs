//! Error types for VGI decoding

use std::path::PathBuf;
use thiserror::Error;

use crate::parser::ParseWarning;

/// Main error type for VGI operations
#[derive(Error, Debug)]
pub enum VgiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported format at line {line}: only 16 bits per element are supported, not {bits}")]
    UnsupportedFormat { line: usize, bits: i64 },

    #[error("Invalid volume descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Could not find data file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Short read in slice {slice}: could read only {actual} over the {expected} expected bytes")]
    ShortRead {
        slice: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Parse error: {0}")]
    Parse(ParseWarning),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Task error: {0}")]
    Task(String),
}

/// Coarse category of a [`VgiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    UnsupportedFormat,
    InvalidDescriptor,
    MissingFile,
    ShortRead,
    Parse,
    Configuration,
    Task,
}

impl VgiError {
    /// Category of this error, for callers that only branch on the kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            VgiError::Io(_) => ErrorKind::Io,
            VgiError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            VgiError::InvalidDescriptor(_) | VgiError::InvalidDimensions(_) => {
                ErrorKind::InvalidDescriptor
            }
            VgiError::MissingFile(_) => ErrorKind::MissingFile,
            VgiError::ShortRead { .. } => ErrorKind::ShortRead,
            VgiError::Parse(_) => ErrorKind::Parse,
            VgiError::Configuration(_) => ErrorKind::Configuration,
            VgiError::Task(_) => ErrorKind::Task,
        }
    }
}

/// Specialized Result type for VGI operations
pub type Result<T> = std::result::Result<T, VgiError>;

impl From<serde_json::Error> for VgiError {
    fn from(err: serde_json::Error) -> Self {
        VgiError::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_read_message() {
        let err = VgiError::ShortRead {
            slice: 3,
            expected: 24,
            actual: 10,
        };
        assert_eq!(err.kind(), ErrorKind::ShortRead);
        let message = err.to_string();
        assert!(message.contains("slice 3"));
        assert!(message.contains("24"));
        assert!(message.contains("10"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: VgiError = io.into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
