//! Filter conditions and sort definitions.
//!
//! Both are carried opaquely by export entries and handed to the source,
//! which owns their interpretation.

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// A condition tree restricting which rows a source returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "args", rename_all = "snake_case")]
pub enum Filter {
    /// Column equals a value.
    Equals { column: String, value: CellValue },
    /// Column is greater than or equal to a value.
    GreaterOrEqual { column: String, value: CellValue },
    /// Column is less than or equal to a value.
    LessOrEqual { column: String, value: CellValue },
    /// Column lies within a closed range.
    Between {
        column: String,
        low: CellValue,
        high: CellValue,
    },
    /// All sub-conditions hold.
    And(Vec<Filter>),
    /// At least one sub-condition holds.
    Or(Vec<Filter>),
    /// The sub-condition does not hold.
    Not(Box<Filter>),
}

impl Filter {
    /// Column equals a value.
    pub fn equals(column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        Self::Equals {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Column is greater than or equal to a value.
    pub fn greater_or_equal(column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        Self::GreaterOrEqual {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Column is less than or equal to a value.
    pub fn less_or_equal(column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        Self::LessOrEqual {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Column lies within the closed range `[low, high]`.
    pub fn between(
        column: impl Into<String>,
        low: impl Into<CellValue>,
        high: impl Into<CellValue>,
    ) -> Self {
        Self::Between {
            column: column.into(),
            low: low.into(),
            high: high.into(),
        }
    }

    /// Combine with another condition; both must hold.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::And(mut conditions) => {
                conditions.push(other);
                Self::And(conditions)
            }
            condition => Self::And(vec![condition, other]),
        }
    }

    /// Combine with another condition; either may hold.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Or(mut conditions) => {
                conditions.push(other);
                Self::Or(conditions)
            }
            condition => Self::Or(vec![condition, other]),
        }
    }

    /// Negate this condition.
    #[must_use]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }
}

/// One sort key: a column and a direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: String,
    pub ascending: bool,
}

impl SortKey {
    /// Ascending sort on a column.
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: true,
        }
    }

    /// Descending sort on a column.
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: false,
        }
    }
}

/// An ordering over rows: keys applied left to right.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sort {
    pub keys: Vec<SortKey>,
}

impl Sort {
    /// Create a sort from explicit keys.
    #[must_use]
    pub fn new(keys: Vec<SortKey>) -> Self {
        Self { keys }
    }

    /// Ascending sort on the given columns.
    pub fn by<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: columns.into_iter().map(SortKey::asc).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_flattens() {
        let filter = Filter::greater_or_equal("ID", 10i64)
            .and(Filter::less_or_equal("ID", 20i64))
            .and(Filter::equals("TEXT", "x"));
        match filter {
            Filter::And(conditions) => assert_eq!(conditions.len(), 3),
            other => panic!("expected And, got {other:?}"),
        }
    }

    #[test]
    fn sort_by_builds_ascending_keys() {
        let sort = Sort::by(["ID", "TEXT"]);
        assert_eq!(sort.keys.len(), 2);
        assert!(sort.keys.iter().all(|key| key.ascending));
    }

    #[test]
    fn filter_serde_roundtrip() {
        let filter = Filter::between("ID", 10i64, 20i64).not();
        let json = serde_json::to_string(&filter).expect("serialize");
        let round: Filter = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round, filter);
    }
}
