use thiserror::Error;

/// Reasons a job cannot take part in salary-range matching.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SalaryRangeError {
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error("type error: {0}")]
    TypeError(String),

    #[error("invalid range: min_salary ({min}) must be less than max_salary ({max})")]
    InvalidRange { min: i64, max: i64 },
}

/// Fieldless view of [`SalaryRangeError`], handy for assertions and counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SalaryErrorKind {
    InvalidSchema,
    TypeError,
    InvalidRange,
}

impl SalaryRangeError {
    pub fn kind(&self) -> SalaryErrorKind {
        match self {
            SalaryRangeError::InvalidSchema(_) => SalaryErrorKind::InvalidSchema,
            SalaryRangeError::TypeError(_) => SalaryErrorKind::TypeError,
            SalaryRangeError::InvalidRange { .. } => SalaryErrorKind::InvalidRange,
        }
    }
}

pub type SalaryRangeResult<T> = Result<T, SalaryRangeError>;
