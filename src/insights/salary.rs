use crate::data::model::{FieldValue, Row, ValidatedJob};

use super::error::{SalaryRangeError, SalaryRangeResult};

const MIN_KEY: &str = "min_salary";
const MAX_KEY: &str = "max_salary";

/// Returned by [`max_salary`] when no row has a usable `max_salary`.
pub const MAX_SALARY_FLOOR: i64 = 0;

/// Returned by [`min_salary`] when no row has a usable `min_salary`.
pub const MIN_SALARY_SENTINEL: i64 = 100_000_000;

// ---------------------------------------------------------------------------
// Bound extraction
// ---------------------------------------------------------------------------

/// Parse a non-negative integer written only with ASCII decimal digits.
///
/// Signs, decimal points, whitespace and the empty string are rejected, as
/// are digit strings too large for `i64`. Non-ASCII decimal digits such as
/// fullwidth `５００００` are rejected too, although Python's
/// `str.isdecimal` accepts them.
pub fn parse_salary(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn salaries<'a>(rows: &'a [Row], column: &'a str) -> impl Iterator<Item = i64> + 'a {
    rows.iter()
        .filter_map(move |row| row.get(column))
        .filter_map(|text| parse_salary(text))
}

/// Largest parseable `max_salary`, or `None` when no row qualifies.
pub fn highest_max_salary(rows: &[Row]) -> Option<i64> {
    salaries(rows, MAX_KEY).max()
}

/// Smallest parseable `min_salary`, or `None` when no row qualifies.
pub fn lowest_min_salary(rows: &[Row]) -> Option<i64> {
    salaries(rows, MIN_KEY).min()
}

/// Largest parseable `max_salary`, or [`MAX_SALARY_FLOOR`] when none.
pub fn max_salary(rows: &[Row]) -> i64 {
    highest_max_salary(rows).map_or(MAX_SALARY_FLOOR, |top| top.max(MAX_SALARY_FLOOR))
}

/// Smallest parseable `min_salary`, or [`MIN_SALARY_SENTINEL`] when none.
///
/// Known defect: the sentinel is indistinguishable from a real salary of
/// 100 000 000 and is *larger* than any real minimum, so callers that do
/// not special-case it get a wrong answer on datasets without salaries.
/// Prefer [`lowest_min_salary`].
pub fn min_salary(rows: &[Row]) -> i64 {
    lowest_min_salary(rows).map_or(MIN_SALARY_SENTINEL, |low| low.min(MIN_SALARY_SENTINEL))
}

// ---------------------------------------------------------------------------
// Range matching
// ---------------------------------------------------------------------------

/// Whether `salary` lies within `[min_salary, max_salary]` of `job`.
///
/// Errors, checked in this order:
/// * `InvalidSchema` – neither `min_salary` nor `max_salary` is present
/// * `TypeError`     – any value of `job` is not an integer
/// * `TypeError`     – `salary` is not an integer
/// * `InvalidSchema` – exactly one of the two keys is present
/// * `InvalidRange`  – `min_salary >= max_salary`
pub fn matches_salary_range(job: &ValidatedJob, salary: &FieldValue) -> SalaryRangeResult<bool> {
    if !job.contains_key(MIN_KEY) && !job.contains_key(MAX_KEY) {
        return Err(SalaryRangeError::InvalidSchema(format!(
            "keys '{MIN_KEY}' and '{MAX_KEY}' must be present"
        )));
    }

    if let Some((key, value)) = job.iter().find(|(_, v)| v.as_integer().is_none()) {
        return Err(SalaryRangeError::TypeError(format!(
            "'{key}' must be an integer, got {} {value}",
            value.type_name()
        )));
    }

    let salary = salary.as_integer().ok_or_else(|| {
        SalaryRangeError::TypeError(format!(
            "'salary' must be an integer, got {} {salary}",
            salary.type_name()
        ))
    })?;

    let min = bound(job, MIN_KEY)?;
    let max = bound(job, MAX_KEY)?;

    if min >= max {
        return Err(SalaryRangeError::InvalidRange { min, max });
    }

    Ok(min <= salary && salary <= max)
}

fn bound(job: &ValidatedJob, key: &str) -> SalaryRangeResult<i64> {
    job.get(key)
        .and_then(FieldValue::as_integer)
        .ok_or_else(|| SalaryRangeError::InvalidSchema(format!("key '{key}' must be present")))
}

// ---------------------------------------------------------------------------
// Range filtering
// ---------------------------------------------------------------------------

/// Outcome of checking one job against a salary.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeAssessment {
    Match,
    OutOfRange,
    Invalid(SalaryRangeError),
}

impl RangeAssessment {
    pub fn is_match(&self) -> bool {
        matches!(self, RangeAssessment::Match)
    }
}

impl From<SalaryRangeResult<bool>> for RangeAssessment {
    fn from(result: SalaryRangeResult<bool>) -> Self {
        match result {
            Ok(true) => RangeAssessment::Match,
            Ok(false) => RangeAssessment::OutOfRange,
            Err(err) => RangeAssessment::Invalid(err),
        }
    }
}

/// One assessment per job, in input order.
pub fn assess_salary_range(jobs: &[ValidatedJob], salary: &FieldValue) -> Vec<RangeAssessment> {
    jobs.iter()
        .map(|job| matches_salary_range(job, salary).into())
        .collect()
}

/// Jobs whose range contains `salary`. Invalid jobs are dropped.
pub fn filter_by_salary_range<'a>(
    jobs: &'a [ValidatedJob],
    salary: &FieldValue,
) -> Vec<&'a ValidatedJob> {
    let assessments = assess_salary_range(jobs, salary);
    keep_matches(jobs, assessments)
}

/// Project a loaded row onto its salary bounds for range matching.
///
/// Decimal-digit cells become integers; any other present cell is kept as a
/// string so that matching reports a type error for it.
pub fn salary_bounds(row: &Row) -> ValidatedJob {
    [MIN_KEY, MAX_KEY]
        .into_iter()
        .filter_map(|key| {
            row.get(key).map(|text| {
                let value = parse_salary(text)
                    .map(FieldValue::Integer)
                    .unwrap_or_else(|| FieldValue::String(text.clone()));
                (key.to_string(), value)
            })
        })
        .collect()
}

/// Loaded rows whose salary bounds contain `salary`.
pub fn filter_rows_by_salary_range<'a>(rows: &'a [Row], salary: &FieldValue) -> Vec<&'a Row> {
    let assessments: Vec<RangeAssessment> = rows
        .iter()
        .map(|row| matches_salary_range(&salary_bounds(row), salary).into())
        .collect();
    keep_matches(rows, assessments)
}

fn keep_matches<T>(items: &[T], assessments: Vec<RangeAssessment>) -> Vec<&T> {
    items
        .iter()
        .zip(assessments)
        .enumerate()
        .filter_map(|(idx, (item, assessment))| match assessment {
            RangeAssessment::Match => Some(item),
            RangeAssessment::OutOfRange => None,
            RangeAssessment::Invalid(err) => {
                log::debug!("Skipping job at position {idx}: {err}");
                None
            }
        })
        .collect()
}
