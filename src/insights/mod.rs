//! Query engine over loaded job rows.
//!
//! Every operation is a pure function of a borrowed slice of rows, so a
//! caller that needs consistent answers across several queries loads the
//! file once and reuses the [`JobDataset`](crate::data::model::JobDataset).

pub mod categories;
pub mod error;
pub mod salary;

pub use categories::{filter_by_industry, filter_by_job_type, unique_industries, unique_job_types};
pub use error::{SalaryErrorKind, SalaryRangeError, SalaryRangeResult};
pub use salary::{
    assess_salary_range, filter_by_salary_range, filter_rows_by_salary_range,
    highest_max_salary, lowest_min_salary, matches_salary_range, max_salary, min_salary,
    parse_salary, salary_bounds, RangeAssessment, MAX_SALARY_FLOOR, MIN_SALARY_SENTINEL,
};
