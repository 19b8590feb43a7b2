use chrono::NaiveDate;
use thiserror::Error;

/// Failures raised by the aggregation pipeline.
///
/// Every variant is recoverable; callers surface it to the user instead of aborting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("invalid range: {0}")]
    EmptyRange(String),
    #[error("invalid top-n limit: {0} (must be at least 1)")]
    InvalidLimit(usize),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
