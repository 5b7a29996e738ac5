//! Task status column values.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a task row, the only field editable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work on the task is under way. Returning here discards any
    /// completion stamp.
    InProgress,
    /// The task is finished; the first observation stamps the
    /// completion pair.
    Completed,
    /// The assignee is being contacted about the task.
    InContact,
    /// The task has slipped past expectations.
    Delayed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::InContact => "in_contact",
            Self::Delayed => "delayed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    /// Parses a status from its storage or grid representation.
    ///
    /// Unrecognised values are rejected outright; an out-of-domain
    /// status must never be silently folded into another variant.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "in_contact" => Ok(Self::InContact),
            "delayed" => Ok(Self::Delayed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
