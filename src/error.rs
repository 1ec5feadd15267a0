//! Error types for labelrust library

use std::io;
use thiserror::Error;

/// Main error type for labelrust operations
#[derive(Debug, Error)]
pub enum LabelError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Low-level XML error from the underlying reader/writer
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Error parsing a label document
    #[error("Parse error: {0}")]
    Parse(String),

    /// Document is structurally not a label document
    #[error("Invalid document format: {0}")]
    InvalidFormat(String),

    /// Unsupported document version
    #[error("Unsupported document version: {0}")]
    UnsupportedVersion(String),

    /// Embedded payload could not be decoded
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for labelrust operations
pub type Result<T> = std::result::Result<T, LabelError>;

impl From<String> for LabelError {
    fn from(s: String) -> Self {
        LabelError::Custom(s)
    }
}

impl From<&str> for LabelError {
    fn from(s: &str) -> Self {
        LabelError::Custom(s.to_string())
    }
}

impl From<base64::DecodeError> for LabelError {
    fn from(e: base64::DecodeError) -> Self {
        LabelError::Encoding(e.to_string())
    }
}
