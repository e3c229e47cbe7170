//! The `RowSource` trait and its page type.

use rowpack_model::{Filter, Row, Sort, TableMetadata};

use crate::error::Result;

/// One page of rows returned by [`RowSource::fetch`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// The rows of this page, in source order.
    pub rows: Vec<Row>,
    /// Whether the source has rows beyond this page.
    pub has_more: bool,
}

impl Page {
    /// Create a page.
    #[must_use]
    pub fn new(rows: Vec<Row>, has_more: bool) -> Self {
        Self { rows, has_more }
    }

    /// Create a final page: no further rows exist.
    #[must_use]
    pub fn complete(rows: Vec<Row>) -> Self {
        Self {
            rows,
            has_more: false,
        }
    }

    /// Number of rows in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether this page holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A provider of tabular rows and column metadata.
///
/// Contract for implementors:
///
/// - Rows have the fixed layout declared by [`metadata`](Self::metadata):
///   cell `i` belongs to column `i`.
/// - The same filter and sort must produce a stable ordering across calls,
///   so that fetching at increasing offsets neither skips nor duplicates
///   rows.
/// - `limit: None` requests all remaining rows in one page.
/// - Filter and sort interpretation belongs to the source; callers pass
///   them through opaquely.
pub trait RowSource {
    /// Column metadata in row-layout order.
    fn metadata(&self) -> Result<TableMetadata>;

    /// Fetch up to `limit` rows starting at `offset`, after applying
    /// `filter` and `sort`.
    fn fetch(
        &self,
        filter: Option<&Filter>,
        sort: Option<&Sort>,
        offset: usize,
        limit: Option<usize>,
    ) -> Result<Page>;
}
