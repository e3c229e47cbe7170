//! Column kinds and typed cell values.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// The semantic type of a column, driving formatting rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Free text.
    #[default]
    Text,
    /// Whole numbers.
    Integer,
    /// Decimal numbers.
    Decimal,
    /// True/false flags.
    Boolean,
    /// Calendar date without time of day.
    Date,
    /// Time of day without a date.
    Time,
    /// Combined date and time.
    Timestamp,
    /// Raw bytes.
    Binary,
}

impl ColumnKind {
    /// Get a human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::Binary => "binary",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single typed cell value.
///
/// `Null` stands for an absent value in any column kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Null,
    Text(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    Binary(Vec<u8>),
}

/// One row of values, fixed layout aligned to metadata column order.
pub type Row = Vec<CellValue>;

impl CellValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Whether this cell holds no value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The text content, if this is a text cell.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Compare two values of compatible kinds.
    ///
    /// `Null` orders before every other value. Integers and decimals compare
    /// numerically with each other. Values of incomparable kinds (and
    /// decimal NaN) return `None`.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Null, Self::Null) => Some(Ordering::Equal),
            (Self::Null, _) => Some(Ordering::Less),
            (_, Self::Null) => Some(Ordering::Greater),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Decimal(a), Self::Decimal(b)) => a.partial_cmp(b),
            (Self::Integer(a), Self::Decimal(b)) => (*a as f64).partial_cmp(b),
            (Self::Decimal(a), Self::Integer(b)) => a.partial_cmp(&(*b as f64)),
            (Self::Boolean(a), Self::Boolean(b)) => Some(a.cmp(b)),
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            (Self::Time(a), Self::Time(b)) => Some(a.cmp(b)),
            (Self::Timestamp(a), Self::Timestamp(b)) => Some(a.cmp(b)),
            (Self::Binary(a), Self::Binary(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_orders_first() {
        assert_eq!(
            CellValue::Null.compare(&CellValue::Integer(1)),
            Some(Ordering::Less)
        );
        assert_eq!(
            CellValue::Integer(1).compare(&CellValue::Null),
            Some(Ordering::Greater)
        );
        assert_eq!(CellValue::Null.compare(&CellValue::Null), Some(Ordering::Equal));
    }

    #[test]
    fn mixed_numeric_comparison() {
        assert_eq!(
            CellValue::Integer(2).compare(&CellValue::Decimal(1.5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            CellValue::Decimal(1.5).compare(&CellValue::Integer(2)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn incomparable_kinds() {
        assert_eq!(CellValue::text("a").compare(&CellValue::Integer(1)), None);
        assert_eq!(
            CellValue::Decimal(f64::NAN).compare(&CellValue::Decimal(1.0)),
            None
        );
    }

    #[test]
    fn serde_roundtrip() {
        let value = CellValue::Integer(42);
        let json = serde_json::to_string(&value).expect("serialize");
        let round: CellValue = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round, value);
    }
}
