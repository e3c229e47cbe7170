//! Error types for export jobs.

use thiserror::Error;

use rowpack_source::SourceError;

use crate::archive::ArchiveError;
use crate::format::FormatError;

/// Errors that can occur while running an export job.
///
/// Any of these aborts the whole job; members already written to the archive
/// stay in the output stream (no rollback).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// The tabular source failed to provide metadata or rows.
    #[error("data access failed: {0}")]
    Source(#[from] SourceError),

    /// A cell value could not be rendered for its column kind.
    #[error("field formatting failed: {0}")]
    Format(#[from] FormatError),

    /// The archive sink failed to accept a member or finalize.
    #[error("archive write failed: {0}")]
    Archive(#[from] ArchiveError),

    /// A requested column does not exist in the source metadata
    /// (strict column mode only).
    #[error("entry {entry}: column {column} not found in source metadata")]
    UnknownColumn { entry: String, column: String },
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
