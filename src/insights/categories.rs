use std::collections::BTreeSet;

use crate::data::model::{JobRef, Row};

// ---------------------------------------------------------------------------
// Distinct values
// ---------------------------------------------------------------------------

/// Every distinct `job_type` in the dataset.
pub fn unique_job_types(rows: &[Row]) -> BTreeSet<String> {
    unique_values(rows, "job_type", |_| true)
}

/// Every distinct non-empty `industry` in the dataset.
pub fn unique_industries(rows: &[Row]) -> BTreeSet<String> {
    unique_values(rows, "industry", |value| !value.is_empty())
}

/// Rows without `column` are skipped; `keep` decides which values count.
fn unique_values(rows: &[Row], column: &str, keep: impl Fn(&str) -> bool) -> BTreeSet<String> {
    rows.iter()
        .filter_map(|row| row.get(column))
        .filter(|value| keep(value.as_str()))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Equality filters
// ---------------------------------------------------------------------------

/// Ids of the rows whose `job_type` equals `job_type`, in input order.
pub fn filter_by_job_type(rows: &[Row], job_type: &str) -> Vec<JobRef> {
    filter_by_column(rows, "job_type", job_type)
}

/// Ids of the rows whose `industry` equals `industry`, in input order.
pub fn filter_by_industry(rows: &[Row], industry: &str) -> Vec<JobRef> {
    filter_by_column(rows, "industry", industry)
}

/// A row passes when it has `column` and the value equals `wanted`.
/// A passing row without an `id` yields an empty id.
fn filter_by_column(rows: &[Row], column: &str, wanted: &str) -> Vec<JobRef> {
    rows.iter()
        .filter(|row| row.get(column).is_some_and(|value| value == wanted))
        .map(|row| JobRef {
            id: row.get("id").cloned().unwrap_or_default(),
        })
        .collect()
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

    fn jobs() -> Vec<Row> {
        vec![
            row(&[("id", "1"), ("job_type", "FULL_TIME"), ("industry", "Finance")]),
            row(&[("id", "2"), ("job_type", "PART_TIME"), ("industry", "")]),
            row(&[("id", "3"), ("job_type", "FULL_TIME"), ("industry", "Healthcare")]),
            row(&[("id", "4"), ("job_type", "INTERN"), ("industry", "Finance")]),
            row(&[("id", "5")]),
        ]
    }

    fn ids(refs: &[JobRef]) -> Vec<&str> {
        refs.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn job_types_are_deduplicated() {
        let rows = jobs();
        let types = unique_job_types(&rows);
        assert_eq!(
            types.into_iter().collect::<Vec<_>>(),
            vec!["FULL_TIME", "INTERN", "PART_TIME"]
        );
    }

    #[test]
    fn every_job_type_comes_from_a_row() {
        let rows = jobs();
        for t in unique_job_types(&rows) {
            assert!(rows.iter().any(|r| r.get("job_type") == Some(&t)));
        }
    }

    #[test]
    fn industries_skip_empty_values() {
        let rows = jobs();
        let industries = unique_industries(&rows);
        assert!(!industries.contains(""));
        assert_eq!(
            industries.into_iter().collect::<Vec<_>>(),
            vec!["Finance", "Healthcare"]
        );
    }

    #[test]
    fn empty_input_has_no_values() {
        assert!(unique_job_types(&[]).is_empty());
        assert!(unique_industries(&[]).is_empty());
        assert!(filter_by_job_type(&[], "FULL_TIME").is_empty());
    }

    #[test]
    fn filter_by_job_type_keeps_order() {
        let rows = jobs();
        assert_eq!(ids(&filter_by_job_type(&rows, "FULL_TIME")), vec!["1", "3"]);
        assert_eq!(ids(&filter_by_job_type(&rows, "INTERN")), vec!["4"]);
        assert!(filter_by_job_type(&rows, "TEMPORARY").is_empty());
    }

    #[test]
    fn filter_by_industry_matches_exactly() {
        let rows = jobs();
        assert_eq!(ids(&filter_by_industry(&rows, "Finance")), vec!["1", "4"]);
        assert_eq!(ids(&filter_by_industry(&rows, "")), vec!["2"]);
        assert!(filter_by_industry(&rows, "finance").is_empty());
    }

    #[test]
    fn matching_row_without_id_yields_empty_id() {
        let rows = vec![row(&[("job_type", "FULL_TIME")])];
        assert_eq!(
            filter_by_job_type(&rows, "FULL_TIME"),
            vec![JobRef { id: String::new() }]
        );
    }
}
