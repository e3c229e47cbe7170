//! Delimited-text rendering of typed rows.
//!
//! Every field is rendered from its [`CellValue`] according to the column's
//! declared [`ColumnKind`], then quoted only when the text would be ambiguous
//! in the delimited output: fields containing the separator, a double quote
//! or a line break are wrapped in double quotes with internal quotes doubled.

use thiserror::Error;

use rowpack_model::{CellValue, ColumnKind, default_label};

/// A value that cannot be rendered for its declared column kind.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The cell's variant does not belong to the column kind.
    #[error("{kind} column cannot render {found} value")]
    KindMismatch {
        kind: ColumnKind,
        found: &'static str,
    },
}

fn variant_label(value: &CellValue) -> &'static str {
    match value {
        CellValue::Null => "null",
        CellValue::Text(_) => "text",
        CellValue::Integer(_) => "integer",
        CellValue::Decimal(_) => "decimal",
        CellValue::Boolean(_) => "boolean",
        CellValue::Date(_) => "date",
        CellValue::Time(_) => "time",
        CellValue::Timestamp(_) => "timestamp",
        CellValue::Binary(_) => "binary",
    }
}

fn mismatch(kind: ColumnKind, value: &CellValue) -> FormatError {
    FormatError::KindMismatch {
        kind,
        found: variant_label(value),
    }
}

/// Render one cell as plain text, without quoting.
///
/// `Null` renders as the empty string for every kind. Numeric kinds accept
/// both integer and decimal cells (decimal text is the shortest roundtrip
/// form, never locale-grouped). Temporal kinds use fixed ISO-style formats:
/// `%Y-%m-%d`, `%H:%M:%S` and `%Y-%m-%d %H:%M:%S`. Binary renders as
/// lowercase hex. Any other cross-kind combination is a [`FormatError`].
pub fn format_value(kind: ColumnKind, value: &CellValue) -> Result<String, FormatError> {
    if value.is_null() {
        return Ok(String::new());
    }

    match (kind, value) {
        (ColumnKind::Text, CellValue::Text(text)) => Ok(text.clone()),
        (ColumnKind::Integer | ColumnKind::Decimal, CellValue::Integer(number)) => {
            Ok(number.to_string())
        }
        (ColumnKind::Integer | ColumnKind::Decimal, CellValue::Decimal(number)) => {
            Ok(number.to_string())
        }
        (ColumnKind::Boolean, CellValue::Boolean(flag)) => Ok(flag.to_string()),
        (ColumnKind::Date, CellValue::Date(date)) => Ok(date.format("%Y-%m-%d").to_string()),
        (ColumnKind::Time, CellValue::Time(time)) => Ok(time.format("%H:%M:%S").to_string()),
        (ColumnKind::Timestamp, CellValue::Timestamp(timestamp)) => {
            Ok(timestamp.format("%Y-%m-%d %H:%M:%S").to_string())
        }
        (ColumnKind::Binary, CellValue::Binary(bytes)) => Ok(hex::encode(bytes)),
        (kind, value) => Err(mismatch(kind, value)),
    }
}

fn needs_quoting(text: &str, separator: &str) -> bool {
    text.contains(separator) || text.contains('"') || text.contains('\n') || text.contains('\r')
}

/// Render one cell and append it to `buf`, quoted if necessary.
pub fn write_field(
    buf: &mut String,
    kind: ColumnKind,
    value: &CellValue,
    separator: &str,
) -> Result<(), FormatError> {
    let text = format_value(kind, value)?;

    if needs_quoting(&text, separator) {
        buf.push('"');
        for ch in text.chars() {
            if ch == '"' {
                buf.push('"');
            }
            buf.push(ch);
        }
        buf.push('"');
    } else {
        buf.push_str(&text);
    }

    Ok(())
}

/// Append one data row: fields separated by `separator`, no trailing
/// separator, terminated with `\n`.
pub fn write_row(
    buf: &mut String,
    fields: &[(ColumnKind, &CellValue)],
    separator: &str,
) -> Result<(), FormatError> {
    for (position, (kind, value)) in fields.iter().enumerate() {
        if position > 0 {
            buf.push_str(separator);
        }
        write_field(buf, *kind, value, separator)?;
    }
    buf.push('\n');
    Ok(())
}

/// Append the header row for the displayed columns.
///
/// Each column shows its explicit label when one is set and non-blank,
/// otherwise a label derived from the raw column name. Labels are written
/// verbatim, joined with the separator.
pub fn write_header(
    buf: &mut String,
    columns: &[String],
    labels: Option<&[String]>,
    separator: &str,
) {
    for (position, column) in columns.iter().enumerate() {
        if position > 0 {
            buf.push_str(separator);
        }

        let explicit = labels
            .and_then(|labels| labels.get(position))
            .map(String::as_str)
            .filter(|label| !label.trim().is_empty());
        match explicit {
            Some(label) => buf.push_str(label),
            None => buf.push_str(&default_label(column)),
        }
    }
    buf.push('\n');
}
