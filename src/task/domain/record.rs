//! Task record aggregate root.

use super::{ExpectedDays, TaskDomainError, TaskName, TaskStatus};
use crate::roster::domain::MemberName;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One row of the task board.
///
/// Every field except `status` and the `completed_at` stamp it drives
/// is fixed at registration. The due date is derived once from the
/// registration instant's date component and is never recomputed, not
/// even on reload from persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    name: TaskName,
    assignee: MemberName,
    registered_at: DateTime<Utc>,
    expected_days: ExpectedDays,
    due_date: NaiveDate,
    status: TaskStatus,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task title.
    pub name: TaskName,
    /// Persisted assignee display name.
    pub assignee: MemberName,
    /// Persisted registration instant.
    pub registered_at: DateTime<Utc>,
    /// Persisted expected-days count.
    pub expected_days: ExpectedDays,
    /// Persisted due date, taken as-is rather than recomputed.
    pub due_date: NaiveDate,
    /// Persisted status column value.
    pub status: TaskStatus,
    /// Persisted completion stamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl TaskRecord {
    /// Creates a new task record from validated parts.
    ///
    /// The registration instant is read once from the injected clock;
    /// the due date is its date component plus the expected day count,
    /// by calendar-day addition. New records start `InProgress` with no
    /// completion stamp.
    ///
    /// This is pure construction: nothing is persisted and nobody is
    /// notified here.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueDateOutOfRange`] when the due-date
    /// addition leaves the representable date range.
    pub fn new(
        name: TaskName,
        assignee: MemberName,
        expected_days: ExpectedDays,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let registered_at = clock.utc();
        let due_date = expected_days.due_from(registered_at.date_naive())?;

        Ok(Self {
            name,
            assignee,
            registered_at,
            expected_days,
            due_date,
            status: TaskStatus::InProgress,
            completed_at: None,
        })
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            name: data.name,
            assignee: data.assignee,
            registered_at: data.registered_at,
            expected_days: data.expected_days,
            due_date: data.due_date,
            status: data.status,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task title.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the assignee display name.
    #[must_use]
    pub const fn assignee(&self) -> &MemberName {
        &self.assignee
    }

    /// Returns the registration instant.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Returns the expected-days count.
    #[must_use]
    pub const fn expected_days(&self) -> ExpectedDays {
        self.expected_days
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the status column value.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the completion stamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Replaces the status column value.
    ///
    /// This models the tracking grid's status edit and touches nothing
    /// else; deriving the completion stamp from the new status is the
    /// reconciliation pass's job via [`Self::reconcile_completion`].
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Derives the completion stamp from the current status.
    ///
    /// The stamp is a one-shot transition marker: it is set only when
    /// the row is `Completed` and not yet stamped, so resubmitting a
    /// completed row under a later clock leaves the original stamp in
    /// place. A row back `InProgress` loses its stamp unconditionally;
    /// every other status leaves the stamp untouched. Applying the pass
    /// twice under the same clock is a no-op the second time.
    pub fn reconcile_completion(&mut self, clock: &impl Clock) {
        match self.status {
            TaskStatus::Completed => {
                if self.completed_at.is_none() {
                    self.completed_at = Some(clock.utc());
                }
            }
            TaskStatus::InProgress => {
                self.completed_at = None;
            }
            TaskStatus::InContact | TaskStatus::Delayed => {}
        }
    }
}
