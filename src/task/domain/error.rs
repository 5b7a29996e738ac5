//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing task domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The expected-days count is not a positive integer.
    #[error("expected days must be at least 1, got {0}")]
    InvalidExpectedDays(u32),

    /// Calendar-day addition left the representable date range.
    #[error("due date {0} day(s) after {1} is out of range")]
    DueDateOutOfRange(u32, chrono::NaiveDate),
}

/// Error returned while parsing task statuses from persistence or the
/// editing grid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
