//! Column-name resolution from fetched rows.

use rowpack_model::{Row, TableMetadata};

use crate::format::format_value;

/// Extract the ordered, non-blank values of one column from already-fetched
/// rows.
///
/// Values are rendered with the column's declared kind; blanks and cells
/// that cannot be rendered are skipped. A column missing from the metadata
/// yields an empty list. No I/O happens here; callers fetch the rows.
#[must_use]
pub fn column_values(metadata: &TableMetadata, rows: &[Row], column: &str) -> Vec<String> {
    let Some(index) = metadata.index_of(column) else {
        return Vec::new();
    };
    let kind = metadata.columns()[index].kind;

    rows.iter()
        .filter_map(|row| row.get(index))
        .filter_map(|cell| format_value(kind, cell).ok())
        .filter(|value| !value.trim().is_empty())
        .collect()
}
