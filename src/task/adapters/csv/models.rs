//! CSV row model and domain conversions.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::roster::domain::{MemberName, RosterDomainError};
use crate::task::domain::{
    ExpectedDays, ParseTaskStatusError, PersistedTaskData, TaskDomainError, TaskName, TaskRecord,
    TaskStatus,
};

/// Storage format for date columns.
pub(super) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage format for time columns.
pub(super) const TIME_FORMAT: &str = "%H:%M:%S";

/// Column header row, in field order.
pub(super) const HEADERS: [&str; 9] = [
    "task_name",
    "assignee",
    "registered_date",
    "registered_time",
    "expected_days",
    "due_date",
    "status",
    "completed_date",
    "completed_time",
];

/// One persisted CSV row.
///
/// Date and time components are stored in separate columns, and the
/// empty string is the canonical unset sentinel for the completion
/// pair; there is no null marker in the format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct TaskRow {
    pub task_name: String,
    pub assignee: String,
    pub registered_date: String,
    pub registered_time: String,
    pub expected_days: u32,
    pub due_date: String,
    pub status: String,
    pub completed_date: String,
    pub completed_time: String,
}

/// Errors returned while reconstructing a stored row into domain types.
#[derive(Debug, Error)]
pub(super) enum TaskRowError {
    /// A task field failed domain validation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The assignee name failed roster validation.
    #[error(transparent)]
    Roster(#[from] RosterDomainError),

    /// The status column holds an unknown value.
    #[error(transparent)]
    Status(#[from] ParseTaskStatusError),

    /// A date or time column does not parse in its storage format.
    #[error("invalid {field} value '{value}'")]
    InvalidDateTime {
        /// Column that failed to parse.
        field: &'static str,
        /// Offending stored value.
        value: String,
    },

    /// Exactly one of the completion columns is set.
    #[error("completed date and time must be set together, got date '{date}' and time '{time}'")]
    HalfSetCompletionPair {
        /// Stored completion date column.
        date: String,
        /// Stored completion time column.
        time: String,
    },
}

impl TaskRow {
    /// Converts a domain record into its storage row.
    pub(super) fn from_domain(record: &TaskRecord) -> Self {
        let (completed_date, completed_time) = record.completed_at().map_or_else(
            || (String::new(), String::new()),
            |stamp| {
                (
                    stamp.date_naive().format(DATE_FORMAT).to_string(),
                    stamp.time().format(TIME_FORMAT).to_string(),
                )
            },
        );

        Self {
            task_name: record.name().as_str().to_owned(),
            assignee: record.assignee().as_str().to_owned(),
            registered_date: record
                .registered_at()
                .date_naive()
                .format(DATE_FORMAT)
                .to_string(),
            registered_time: record.registered_at().time().format(TIME_FORMAT).to_string(),
            expected_days: record.expected_days().value(),
            due_date: record.due_date().format(DATE_FORMAT).to_string(),
            status: record.status().as_str().to_owned(),
            completed_date,
            completed_time,
        }
    }

    /// Reconstructs the domain record for a stored row.
    ///
    /// The stored due date is taken as-is; it was computed once at
    /// registration and is never recomputed on reload.
    pub(super) fn into_domain(self) -> Result<TaskRecord, TaskRowError> {
        let name = TaskName::new(self.task_name)?;
        let assignee = MemberName::new(self.assignee)?;
        let expected_days = ExpectedDays::new(self.expected_days)?;
        let registered_at = parse_instant(
            "registered_date",
            &self.registered_date,
            "registered_time",
            &self.registered_time,
        )?;
        let due_date = parse_date("due_date", &self.due_date)?;
        let status = TaskStatus::try_from(self.status.as_str())?;

        let completed_at = match (
            self.completed_date.is_empty(),
            self.completed_time.is_empty(),
        ) {
            (true, true) => None,
            (false, false) => Some(parse_instant(
                "completed_date",
                &self.completed_date,
                "completed_time",
                &self.completed_time,
            )?),
            _ => {
                return Err(TaskRowError::HalfSetCompletionPair {
                    date: self.completed_date,
                    time: self.completed_time,
                });
            }
        };

        Ok(TaskRecord::from_persisted(PersistedTaskData {
            name,
            assignee,
            registered_at,
            expected_days,
            due_date,
            status,
            completed_at,
        }))
    }
}

/// Parses a date column in storage format.
fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, TaskRowError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| TaskRowError::InvalidDateTime {
        field,
        value: value.to_owned(),
    })
}

/// Parses a time column in storage format.
fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, TaskRowError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| TaskRowError::InvalidDateTime {
        field,
        value: value.to_owned(),
    })
}

/// Combines a stored date/time column pair into a UTC instant.
fn parse_instant(
    date_field: &'static str,
    date_value: &str,
    time_field: &'static str,
    time_value: &str,
) -> Result<DateTime<Utc>, TaskRowError> {
    let date = parse_date(date_field, date_value)?;
    let time = parse_time(time_field, time_value)?;
    Ok(NaiveDateTime::new(date, time).and_utc())
}
