//! Expected-duration type and due-date arithmetic.

use super::TaskDomainError;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive number of days a task is expected to take.
///
/// The count is fixed at registration and drives the one-time due-date
/// computation; it is never re-applied afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpectedDays(u32);

impl ExpectedDays {
    /// Creates a validated expected-days count.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidExpectedDays`] when the value
    /// is zero.
    pub const fn new(value: u32) -> Result<Self, TaskDomainError> {
        if value == 0 {
            return Err(TaskDomainError::InvalidExpectedDays(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying day count.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Computes the due date by calendar-day addition from a start date.
    ///
    /// Calendar-day addition (rather than a 24-hour multiple) keeps the
    /// result correct across daylight-saving transitions; the start
    /// date is the date component of the registration instant, its
    /// time of day plays no part.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueDateOutOfRange`] when the addition
    /// leaves the representable date range.
    pub fn due_from(self, start: NaiveDate) -> Result<NaiveDate, TaskDomainError> {
        start
            .checked_add_days(Days::new(u64::from(self.0)))
            .ok_or_else(|| TaskDomainError::DueDateOutOfRange(self.0, start))
    }
}

impl fmt::Display for ExpectedDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
