//! Error types for tabular sources.

use thiserror::Error;

/// Errors that can occur when reading metadata or rows from a source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// The source failed to provide column metadata.
    #[error("metadata unavailable: {message}")]
    Metadata { message: String },

    /// The source failed to fetch rows.
    #[error("fetch failed: {message}")]
    Fetch { message: String },

    /// A row does not match the metadata column count.
    #[error("row length mismatch: expected {expected}, got {actual}")]
    RowLengthMismatch { expected: usize, actual: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    /// Create a Metadata error.
    pub fn metadata(message: impl Into<String>) -> Self {
        Self::Metadata {
            message: message.into(),
        }
    }

    /// Create a Fetch error.
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }
}

/// Result type alias for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
