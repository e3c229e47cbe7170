//! Export entries: the configuration for one archive member.

use rowpack_model::{Filter, Sort};
use rowpack_source::{RowSource, SourceError};

use crate::columns::column_values;

/// Configuration for exporting one dataset as one archive member.
///
/// Entries are immutable: they are assembled through [`EntryBuilder`] and
/// only read during export. The source is borrowed, so one source can back
/// several entries (for example with different filters).
pub struct Entry<'src> {
    name: String,
    source: &'src dyn RowSource,
    filter: Option<Filter>,
    sort: Option<Sort>,
    columns: Option<Vec<String>>,
    labels: Option<Vec<String>>,
    show_header: bool,
}

impl<'src> Entry<'src> {
    /// Start building an entry with the given member name and source.
    pub fn builder(name: impl Into<String>, source: &'src dyn RowSource) -> EntryBuilder<'src> {
        EntryBuilder::new(name, source)
    }

    /// The archive member name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tabular source backing this entry.
    #[must_use]
    pub fn source(&self) -> &'src dyn RowSource {
        self.source
    }

    /// The filter handed to the source, if any.
    #[must_use]
    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    /// The sort handed to the source, if any.
    #[must_use]
    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// The explicit column list; `None` means all source columns.
    #[must_use]
    pub fn columns(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }

    /// Explicit header labels, if any.
    #[must_use]
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Whether a header row precedes the data rows.
    #[must_use]
    pub fn show_header(&self) -> bool {
        self.show_header
    }
}

impl std::fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("filter", &self.filter)
            .field("sort", &self.sort)
            .field("columns", &self.columns)
            .field("labels", &self.labels)
            .field("show_header", &self.show_header)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Entry`].
pub struct EntryBuilder<'src> {
    name: String,
    source: &'src dyn RowSource,
    filter: Option<Filter>,
    sort: Option<Sort>,
    columns: Option<Vec<String>>,
    labels: Option<Vec<String>>,
    show_header: bool,
}

impl<'src> EntryBuilder<'src> {
    /// Create a builder with the given member name and source.
    pub fn new(name: impl Into<String>, source: &'src dyn RowSource) -> Self {
        Self {
            name: name.into(),
            source,
            filter: None,
            sort: None,
            columns: None,
            labels: None,
            show_header: false,
        }
    }

    /// Restrict the rows with a filter.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Order the rows.
    #[must_use]
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the explicit column list.
    ///
    /// An empty iterator clears the list, reverting to all source columns.
    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        self.columns = if columns.is_empty() {
            None
        } else {
            Some(columns)
        };
        self
    }

    /// Set the explicit column list from the values of `label_column` in an
    /// auxiliary source.
    ///
    /// All matching rows are fetched in one unbounded call; blank values are
    /// skipped and the remaining values keep their row order. When nothing
    /// non-blank is collected the explicit list stays unset, so the entry
    /// falls back to all source columns.
    pub fn columns_from_source(
        mut self,
        source: &dyn RowSource,
        label_column: &str,
        filter: Option<&Filter>,
        sort: Option<&Sort>,
    ) -> Result<Self, SourceError> {
        let metadata = source.metadata()?;
        let page = source.fetch(filter, sort, 0, None)?;

        let columns = column_values(&metadata, &page.rows, label_column);
        if !columns.is_empty() {
            self.columns = Some(columns);
        }
        Ok(self)
    }

    /// Set the header labels, one per displayed column.
    #[must_use]
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        self.labels = if labels.is_empty() { None } else { Some(labels) };
        self
    }

    /// Emit a header row before the data rows.
    #[must_use]
    pub fn show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    /// Finish the entry.
    #[must_use]
    pub fn build(self) -> Entry<'src> {
        Entry {
            name: self.name,
            source: self.source,
            filter: self.filter,
            sort: self.sort,
            columns: self.columns,
            labels: self.labels,
            show_header: self.show_header,
        }
    }
}

#[cfg(test)]
mod tests {
    use rowpack_model::{CellValue, Column, TableMetadata};
    use rowpack_source::MemorySource;

    use super::*;

    fn aux_source(values: &[&str]) -> MemorySource {
        let metadata = TableMetadata::new(vec![Column::integer("ID"), Column::text("NAME")]);
        let rows = values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                vec![CellValue::Integer(index as i64), CellValue::text(*value)]
            })
            .collect();
        MemorySource::new(metadata, rows).expect("valid rows")
    }

    #[test]
    fn empty_column_list_clears_explicit_columns() {
        let source = aux_source(&[]);
        let entry = Entry::builder("data.csv", &source)
            .columns(["ID", "NAME"])
            .columns(Vec::<String>::new())
            .build();
        assert_eq!(entry.columns(), None);
    }

    #[test]
    fn columns_from_source_skips_blank_values() {
        let aux = aux_source(&["TEXT", "", "VALUE"]);
        let data = aux_source(&[]);

        let entry = Entry::builder("data.csv", &data)
            .columns_from_source(&aux, "NAME", None, None)
            .expect("resolve columns")
            .build();
        assert_eq!(
            entry.columns(),
            Some(&["TEXT".to_string(), "VALUE".to_string()][..])
        );
    }

    #[test]
    fn columns_from_source_with_no_values_leaves_list_unset() {
        let aux = aux_source(&["", "  "]);
        let data = aux_source(&[]);

        let entry = Entry::builder("data.csv", &data)
            .columns_from_source(&aux, "NAME", None, None)
            .expect("resolve columns")
            .build();
        assert_eq!(entry.columns(), None);
    }

    #[test]
    fn defaults() {
        let source = aux_source(&[]);
        let entry = Entry::builder("data.csv", &source).build();
        assert_eq!(entry.name(), "data.csv");
        assert!(!entry.show_header());
        assert!(entry.filter().is_none());
        assert!(entry.sort().is_none());
        assert!(entry.labels().is_none());
    }
}
