use chrono::NaiveDate;
use thiserror::Error;

/// Error types for the compute module.
///
/// Display strings double as the user-visible validation messages, so
/// they are phrased for the dashboard, not for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    /// Custom mode with exactly one of the two dates supplied
    #[error("Please select a valid analysis period")]
    MissingBound,

    /// Custom range with start after end
    #[error("Start date {start} is after end date {end}")]
    ReversedRange { start: NaiveDate, end: NaiveDate },
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
