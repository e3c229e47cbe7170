//! Column and table metadata.

use serde::{Deserialize, Serialize};

use crate::value::ColumnKind;

/// Definition of one column in a tabular source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, unique within its table.
    pub name: String,
    /// Semantic type of the column's values.
    pub kind: ColumnKind,
    /// Optional human-readable label.
    pub label: Option<String>,
}

impl Column {
    /// Create a column with a name and kind.
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: None,
        }
    }

    /// Create a text column.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Text)
    }

    /// Create an integer column.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Integer)
    }

    /// Create a decimal column.
    pub fn decimal(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Decimal)
    }

    /// Create a timestamp column.
    pub fn timestamp(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Timestamp)
    }

    /// Attach a label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Ordered column metadata for one tabular source.
///
/// Column order defines the fixed row layout: cell `i` of every row belongs
/// to column `i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    columns: Vec<Column>,
}

impl TableMetadata {
    /// Create metadata from an ordered column list.
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// The columns in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column in the row layout. Matching is case-sensitive.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    /// Column definition by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// The column names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> TableMetadata {
        TableMetadata::new(vec![
            Column::integer("ID"),
            Column::text("TEXT"),
            Column::decimal("VALUE"),
        ])
    }

    #[test]
    fn index_lookup() {
        let meta = metadata();
        assert_eq!(meta.index_of("ID"), Some(0));
        assert_eq!(meta.index_of("VALUE"), Some(2));
        assert_eq!(meta.index_of("MISSING"), None);
        // case-sensitive on purpose
        assert_eq!(meta.index_of("id"), None);
    }

    #[test]
    fn names_preserve_order() {
        assert_eq!(metadata().names(), vec!["ID", "TEXT", "VALUE"]);
    }
}
