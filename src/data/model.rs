use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Row – one job listing as loaded from the source
// ---------------------------------------------------------------------------

/// A single job listing: field name → raw cell text.
///
/// Every value is kept exactly as the source delivered it, so salary columns
/// may hold empty or non-numeric strings.
pub type Row = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// JobDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All rows of a source file, in source order.
#[derive(Debug, Clone, Default)]
pub struct JobDataset {
    /// All job listings (rows).
    pub rows: Vec<Row>,
    /// Sorted list of every field name seen in any row.
    pub column_names: Vec<String>,
}

impl JobDataset {
    /// Build the column index from the loaded rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let column_names: BTreeSet<String> = rows
            .iter()
            .flat_map(|row| row.keys().cloned())
            .collect();
        JobDataset {
            rows,
            column_names: column_names.into_iter().collect(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// JobRef – minimal record returned by equality filters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRef {
    pub id: String,
}

// ---------------------------------------------------------------------------
// FieldValue / ValidatedJob – typed input to range matching
// ---------------------------------------------------------------------------

/// A dynamically-typed cell. Range matching only accepts `Integer`, but the
/// other variants exist so callers can hand over records whose coercion
/// failed and get a type error back instead of a panic.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
}

/// A job record whose salary fields are expected to already be integers.
pub type ValidatedJob = BTreeMap<String, FieldValue>;

impl FieldValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Short type label used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::String(_) => "string",
            FieldValue::Bool(_) => "bool",
            FieldValue::Null => "null",
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::String(s) => write!(f, "{s:?}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Null => write!(f, "<null>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn dataset_collects_sorted_column_names() {
        let ds = JobDataset::from_rows(vec![
            row(&[("job_type", "FULL_TIME"), ("id", "1")]),
            row(&[("industry", "Finance"), ("id", "2")]),
        ]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column_names, vec!["id", "industry", "job_type"]);
    }

    #[test]
    fn empty_dataset() {
        let ds = JobDataset::from_rows(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.column_names.is_empty());
    }

    #[test]
    fn only_integers_convert() {
        assert_eq!(FieldValue::from(7_i64).as_integer(), Some(7));
        assert_eq!(FieldValue::from("7").as_integer(), None);
        assert_eq!(FieldValue::from(7.0_f64).as_integer(), None);
        assert_eq!(FieldValue::Null.type_name(), "null");
    }
}
