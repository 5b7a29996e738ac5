//! Domain model for task records.
//!
//! Task records are validated at construction and immutable afterwards
//! except for their status and the completion stamp it drives. All
//! timestamps flow from an injected clock; the domain never reads wall
//! time.

mod error;
mod name;
mod record;
mod schedule;
mod status;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use name::TaskName;
pub use record::{PersistedTaskData, TaskRecord};
pub use schedule::ExpectedDays;
pub use status::TaskStatus;
