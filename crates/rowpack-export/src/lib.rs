//! Bulk export of tabular datasets into one compressed archive.
//!
//! Each configured [`Entry`] pages through the rows of a
//! [`RowSource`](rowpack_source::RowSource), renders them as delimited text
//! with type-aware quoting, and becomes one member of a zip container.
//! Compression is always applied; setting a password additionally encrypts
//! every member with AES-256.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use rowpack_export::{Entry, Exporter, ExportOptions};
//! use rowpack_model::{CellValue, Column, Filter, TableMetadata};
//! use rowpack_source::MemorySource;
//!
//! let metadata = TableMetadata::new(vec![
//!     Column::integer("ID"),
//!     Column::text("TEXT"),
//! ]);
//! let rows = (1..=3)
//!     .map(|i| vec![CellValue::Integer(i), CellValue::text(format!("row {i}"))])
//!     .collect();
//! let source = MemorySource::new(metadata, rows).unwrap();
//!
//! let mut exporter = Exporter::with_options(
//!     ExportOptions::new().with_separator(","),
//! );
//! exporter.add(
//!     Entry::builder("rows.csv", &source)
//!         .filter(Filter::greater_or_equal("ID", CellValue::Integer(2)))
//!         .show_header(true)
//!         .build(),
//! );
//!
//! let mut out = Cursor::new(Vec::new());
//! exporter.export(&mut out).unwrap();
//! ```
//!
//! # Failure semantics
//!
//! Any source, formatting or archive error aborts the whole job. Members
//! already written are not rolled back; the archive trailer is still
//! written, so the output holds a structurally closed container with only
//! the members completed before the error.

mod archive;
mod columns;
mod coordinator;
mod entry;
mod error;
mod format;

pub use archive::{ArchiveError, ArchiveSink, ZipSink};
pub use columns::column_values;
pub use coordinator::{ColumnMode, ExportOptions, Exporter, FETCH_PAGE_SIZE};
pub use entry::{Entry, EntryBuilder};
pub use error::{ExportError, Result};
pub use format::{FormatError, format_value, write_field, write_header, write_row};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
