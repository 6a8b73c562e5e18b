//! Error types for decoding steps.
//!
//! Decoders recover from every one of these locally. They exist so that the
//! best-effort helpers can report what went wrong and leave the choice of
//! default to the caller.

use thiserror::Error;

/// Errors that can occur while resolving configuration or decoding a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Payload is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("Invalid boolean for '{key}': {value:?}")]
    InvalidBool { key: String, value: String },

    #[error("Invalid column index for '{key}': {value:?}")]
    InvalidIndex { key: String, value: String },

    #[error("Unknown timestamp format for '{key}': {value:?}")]
    InvalidFormat { key: String, value: String },

    #[error("Invalid property {0:?}: expected key=value")]
    InvalidProperty(String),

    #[error("Column {index} not present in record with {columns} column(s)")]
    MissingColumn { index: usize, columns: usize },

    #[error("Unable to parse timestamp from {value:?}: {message}")]
    InvalidTimestamp { value: String, message: String },
}

/// Result type alias for decoding steps.
pub type Result<T> = std::result::Result<T, DecodeError>;
