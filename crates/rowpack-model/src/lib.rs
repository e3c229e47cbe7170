//! Tabular data model shared by sources and the export core.
//!
//! This crate defines the vocabulary the rest of the workspace speaks:
//!
//! - [`ColumnKind`] and [`CellValue`]: the semantic type of a column and the
//!   typed values its cells hold
//! - [`Column`] and [`TableMetadata`]: ordered column metadata for one table
//! - [`Filter`] and [`Sort`]: condition trees and orderings, passed opaquely
//!   to sources
//!
//! # Example
//!
//! ```
//! use rowpack_model::{CellValue, Column, ColumnKind, Filter, TableMetadata};
//!
//! let metadata = TableMetadata::new(vec![
//!     Column::new("ID", ColumnKind::Integer),
//!     Column::new("TEXT", ColumnKind::Text),
//! ]);
//! assert_eq!(metadata.index_of("TEXT"), Some(1));
//!
//! let filter = Filter::greater_or_equal("ID", CellValue::Integer(10))
//!     .and(Filter::less_or_equal("ID", CellValue::Integer(20)));
//! ```

mod filter;
mod label;
mod metadata;
mod value;

pub use filter::{Filter, Sort, SortKey};
pub use label::default_label;
pub use metadata::{Column, TableMetadata};
pub use value::{CellValue, ColumnKind, Row};
