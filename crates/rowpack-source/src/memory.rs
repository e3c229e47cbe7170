//! In-memory row source.

use std::cmp::Ordering;

use rowpack_model::{CellValue, Filter, Row, Sort, TableMetadata};

use crate::error::{Result, SourceError};
use crate::source::{Page, RowSource};

/// A [`RowSource`] backed by rows held in memory.
///
/// Filters and sorts are evaluated against the stored rows on every fetch;
/// sorting is stable, so paged fetches with the same filter and sort see a
/// consistent ordering.
#[derive(Debug, Clone)]
pub struct MemorySource {
    metadata: TableMetadata,
    rows: Vec<Row>,
}

impl MemorySource {
    /// Create a source from metadata and rows.
    ///
    /// Every row must match the metadata column count.
    pub fn new(metadata: TableMetadata, rows: Vec<Row>) -> Result<Self> {
        let expected = metadata.len();
        for row in &rows {
            if row.len() != expected {
                return Err(SourceError::RowLengthMismatch {
                    expected,
                    actual: row.len(),
                });
            }
        }

        Ok(Self { metadata, rows })
    }

    /// Create a source with no rows.
    #[must_use]
    pub fn empty(metadata: TableMetadata) -> Self {
        Self {
            metadata,
            rows: Vec::new(),
        }
    }

    /// Append one row.
    pub fn push_row(&mut self, row: Row) -> Result<()> {
        if row.len() != self.metadata.len() {
            return Err(SourceError::RowLengthMismatch {
                expected: self.metadata.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Total number of stored rows, before filtering.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell<'row>(&self, row: &'row Row, column: &str) -> &'row CellValue {
        // a column missing from the layout compares as null
        self.metadata
            .index_of(column)
            .and_then(|index| row.get(index))
            .unwrap_or(&CellValue::Null)
    }

    fn matches(&self, filter: &Filter, row: &Row) -> bool {
        match filter {
            Filter::Equals { column, value } => {
                self.cell(row, column).compare(value) == Some(Ordering::Equal)
            }
            Filter::GreaterOrEqual { column, value } => matches!(
                self.cell(row, column).compare(value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Filter::LessOrEqual { column, value } => matches!(
                self.cell(row, column).compare(value),
                Some(Ordering::Less | Ordering::Equal)
            ),
            Filter::Between { column, low, high } => {
                let cell = self.cell(row, column);
                matches!(
                    cell.compare(low),
                    Some(Ordering::Greater | Ordering::Equal)
                ) && matches!(cell.compare(high), Some(Ordering::Less | Ordering::Equal))
            }
            Filter::And(conditions) => {
                conditions.iter().all(|condition| self.matches(condition, row))
            }
            Filter::Or(conditions) => {
                conditions.iter().any(|condition| self.matches(condition, row))
            }
            Filter::Not(condition) => !self.matches(condition, row),
        }
    }

    fn order(&self, sort: &Sort, a: &Row, b: &Row) -> Ordering {
        for key in &sort.keys {
            let ordering = self
                .cell(a, &key.column)
                .compare(self.cell(b, &key.column))
                .unwrap_or(Ordering::Equal);
            let ordering = if key.ascending {
                ordering
            } else {
                ordering.reverse()
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

impl RowSource for MemorySource {
    fn metadata(&self) -> Result<TableMetadata> {
        Ok(self.metadata.clone())
    }

    fn fetch(
        &self,
        filter: Option<&Filter>,
        sort: Option<&Sort>,
        offset: usize,
        limit: Option<usize>,
    ) -> Result<Page> {
        let mut selected: Vec<&Row> = match filter {
            Some(filter) => self
                .rows
                .iter()
                .filter(|row| self.matches(filter, row))
                .collect(),
            None => self.rows.iter().collect(),
        };

        if let Some(sort) = sort
            && !sort.keys.is_empty()
        {
            selected.sort_by(|a, b| self.order(sort, a, b));
        }

        let total = selected.len();
        if offset >= total {
            return Ok(Page::complete(Vec::new()));
        }

        let end = match limit {
            Some(limit) => (offset + limit).min(total),
            None => total,
        };
        let rows = selected[offset..end].iter().map(|row| (*row).clone()).collect();

        Ok(Page::new(rows, end < total))
    }
}

#[cfg(test)]
mod tests {
    use rowpack_model::Column;

    use super::*;

    fn source() -> MemorySource {
        let metadata = TableMetadata::new(vec![Column::integer("ID"), Column::text("TEXT")]);
        let rows = (1..=10)
            .map(|i| vec![CellValue::Integer(i), CellValue::text(format!("row {i}"))])
            .collect();
        MemorySource::new(metadata, rows).expect("valid rows")
    }

    #[test]
    fn rejects_mismatched_rows() {
        let metadata = TableMetadata::new(vec![Column::integer("ID")]);
        let result = MemorySource::new(metadata, vec![vec![]]);
        assert!(matches!(
            result,
            Err(SourceError::RowLengthMismatch {
                expected: 1,
                actual: 0
            })
        ));
    }

    #[test]
    fn filter_between_is_closed() {
        let source = source();
        let filter = Filter::between("ID", 3i64, 5i64);
        let page = source.fetch(Some(&filter), None, 0, None).expect("fetch");
        assert_eq!(page.len(), 3);
        assert_eq!(page.rows[0][0], CellValue::Integer(3));
        assert_eq!(page.rows[2][0], CellValue::Integer(5));
    }

    #[test]
    fn unknown_filter_column_matches_nothing() {
        let source = source();
        let filter = Filter::equals("MISSING", 1i64);
        let page = source.fetch(Some(&filter), None, 0, None).expect("fetch");
        assert!(page.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn sort_descending() {
        let source = source();
        let sort = Sort::new(vec![rowpack_model::SortKey::desc("ID")]);
        let page = source.fetch(None, Some(&sort), 0, Some(3)).expect("fetch");
        assert_eq!(page.rows[0][0], CellValue::Integer(10));
        assert!(page.has_more);
    }

    #[test]
    fn paging_reports_has_more() {
        let source = source();
        let first = source.fetch(None, None, 0, Some(4)).expect("fetch");
        assert_eq!(first.len(), 4);
        assert!(first.has_more);

        let last = source.fetch(None, None, 8, Some(4)).expect("fetch");
        assert_eq!(last.len(), 2);
        assert!(!last.has_more);

        let past_end = source.fetch(None, None, 100, Some(4)).expect("fetch");
        assert!(past_end.is_empty());
        assert!(!past_end.has_more);
    }
}
