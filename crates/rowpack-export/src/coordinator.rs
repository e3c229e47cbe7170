//! The export coordinator: descriptors in, one archive out.

use std::io::{Seek, Write};

use serde::{Deserialize, Serialize};

use rowpack_model::{CellValue, ColumnKind, TableMetadata};

use crate::archive::{ArchiveSink, ZipSink};
use crate::entry::Entry;
use crate::error::{ExportError, Result};
use crate::format::{write_header, write_row};

/// Rows fetched per page while draining a source.
pub const FETCH_PAGE_SIZE: usize = 1000;

/// How the coordinator treats a requested column that the source metadata
/// does not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnMode {
    /// Render the column's cells as blanks (default).
    #[default]
    Lenient,
    /// Fail the job with [`ExportError::UnknownColumn`].
    Strict,
}

/// Job-level export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Field separator placed between columns (default `;`).
    pub separator: String,
    /// Archive password; when set, members are AES-256 encrypted.
    pub password: Option<String>,
    /// Handling of column names absent from source metadata.
    pub column_mode: ColumnMode,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            separator: ";".to_string(),
            password: None,
            column_mode: ColumnMode::default(),
        }
    }
}

impl ExportOptions {
    /// Create options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the archive password, enabling encryption.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the unknown-column handling mode.
    #[must_use]
    pub fn with_column_mode(mut self, mode: ColumnMode) -> Self {
        self.column_mode = mode;
        self
    }
}

/// Effective position and kind of one displayed column. A column missing
/// from the metadata has no index; its cells render blank in lenient mode.
struct ColumnBinding {
    index: Option<usize>,
    kind: ColumnKind,
}

/// Exports the data of its entries into one compressed, optionally
/// encrypted archive.
///
/// Entries are processed strictly in insertion order, one at a time; each
/// becomes exactly one archive member. The job is transient: configure,
/// call [`export`](Self::export) once, discard.
pub struct Exporter<'src> {
    options: ExportOptions,
    entries: Vec<Entry<'src>>,
}

impl Default for Exporter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'src> Exporter<'src> {
    /// Create an exporter with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ExportOptions::default())
    }

    /// Create an exporter with the given options.
    #[must_use]
    pub fn with_options(options: ExportOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
        }
    }

    /// The job options.
    #[must_use]
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Set the field separator.
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.options.separator = separator.into();
    }

    /// Set or clear the archive password.
    pub fn set_password(&mut self, password: Option<String>) {
        self.options.password = password;
    }

    /// Add an entry to the archive.
    pub fn add(&mut self, entry: Entry<'src>) {
        self.entries.push(entry);
    }

    /// Remove the first entry with the given member name.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.entries.iter().position(|entry| entry.name() == name) {
            Some(position) => {
                self.entries.remove(position);
                true
            }
            None => false,
        }
    }

    /// The configured entries, in archive member order.
    #[must_use]
    pub fn entries(&self) -> &[Entry<'src>] {
        &self.entries
    }

    /// Export all entries as one zip archive written to `out`.
    ///
    /// Compression is always on; encryption is on iff a password is set.
    /// Any error aborts the job immediately. Members written before the
    /// error are not rolled back, but the archive trailer is written on the
    /// error path too, so the stream always holds a structurally closed
    /// container.
    pub fn export<W: Write + Seek>(&self, out: &mut W) -> Result<()> {
        let mut sink = ZipSink::new(out, self.options.password.clone());
        let result = self.export_into(&mut sink);
        let finished = sink.finish();
        result?;
        finished?;
        Ok(())
    }

    /// Export all entries into an already-open archive sink.
    ///
    /// The sink is not finalized; that stays with the caller, on success
    /// and on error alike.
    pub fn export_into(&self, sink: &mut dyn ArchiveSink) -> Result<()> {
        for entry in &self.entries {
            self.write_entry(sink, entry)?;
        }
        Ok(())
    }

    fn bind_columns(
        &self,
        entry: &Entry<'_>,
        metadata: &TableMetadata,
        names: &[String],
    ) -> Result<Vec<ColumnBinding>> {
        let mut bindings = Vec::with_capacity(names.len());
        for name in names {
            match metadata.index_of(name) {
                Some(index) => bindings.push(ColumnBinding {
                    index: Some(index),
                    kind: metadata.columns()[index].kind,
                }),
                None if self.options.column_mode == ColumnMode::Strict => {
                    return Err(ExportError::UnknownColumn {
                        entry: entry.name().to_string(),
                        column: name.clone(),
                    });
                }
                None => {
                    tracing::warn!(
                        entry = entry.name(),
                        column = name.as_str(),
                        "column not in source metadata, writing blanks"
                    );
                    bindings.push(ColumnBinding {
                        index: None,
                        kind: ColumnKind::Text,
                    });
                }
            }
        }
        Ok(bindings)
    }

    fn write_entry(&self, sink: &mut dyn ArchiveSink, entry: &Entry<'_>) -> Result<()> {
        let metadata = entry.source().metadata()?;
        let names = match entry.columns() {
            Some(columns) => columns.to_vec(),
            None => metadata.names(),
        };
        let bindings = self.bind_columns(entry, &metadata, &names)?;

        let mut text = String::new();
        if entry.show_header() {
            write_header(&mut text, &names, entry.labels(), &self.options.separator);
        }

        let mut offset = 0;
        loop {
            let page = entry.source().fetch(
                entry.filter(),
                entry.sort(),
                offset,
                Some(FETCH_PAGE_SIZE),
            )?;

            for row in &page.rows {
                let fields: Vec<(ColumnKind, &CellValue)> = bindings
                    .iter()
                    .map(|binding| {
                        let cell = binding
                            .index
                            .and_then(|index| row.get(index))
                            .unwrap_or(&CellValue::Null);
                        (binding.kind, cell)
                    })
                    .collect();
                write_row(&mut text, &fields, &self.options.separator)?;
            }

            offset += page.len();
            // an empty page ends the loop even if the source claims more,
            // otherwise a misbehaving source would never terminate
            if page.is_empty() || !page.has_more {
                break;
            }
        }

        tracing::debug!(
            entry = entry.name(),
            rows = offset,
            bytes = text.len(),
            "entry buffered"
        );
        sink.add_member(entry.name(), text.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = ExportOptions::default();
        assert_eq!(options.separator, ";");
        assert_eq!(options.password, None);
        assert_eq!(options.column_mode, ColumnMode::Lenient);
    }

    #[test]
    fn options_serde_roundtrip() {
        let options = ExportOptions::new()
            .with_separator(",")
            .with_password("secret")
            .with_column_mode(ColumnMode::Strict);
        let json = serde_json::to_string(&options).expect("serialize");
        let round: ExportOptions = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round.separator, ",");
        assert_eq!(round.password.as_deref(), Some("secret"));
        assert_eq!(round.column_mode, ColumnMode::Strict);
    }
}
