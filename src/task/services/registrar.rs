//! Service layer for task registration.

use crate::notify::ports::Notifier;
use crate::notify::services::NoticeComposer;
use crate::roster::domain::{Member, MemberName, RosterDomainError, Session};
use crate::roster::ports::MemberDirectory;
use crate::task::domain::{ExpectedDays, TaskDomainError, TaskName, TaskRecord};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterTaskRequest {
    name: String,
    assignee: String,
    expected_days: u32,
}

impl RegisterTaskRequest {
    /// Creates a request with the fields the entry form collects.
    #[must_use]
    pub fn new(name: impl Into<String>, assignee: impl Into<String>, expected_days: u32) -> Self {
        Self {
            name: name.into(),
            assignee: assignee.into(),
            expected_days,
        }
    }
}

/// Service-level errors for task registration.
#[derive(Debug, Error)]
pub enum TaskRegistrarError {
    /// Task field validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The assignee name failed roster validation.
    #[error(transparent)]
    Roster(#[from] RosterDomainError),

    /// The assignee is not in the known identity set.
    #[error("assignee '{0}' is not a roster member")]
    UnknownAssignee(MemberName),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task registration operations.
pub type TaskRegistrarResult<T> = Result<T, TaskRegistrarError>;

/// Task registration orchestration service.
///
/// Validates the entry form's fields, constructs the immutable record
/// with derived date fields, appends it to the row table, and fans out
/// assignment notices. Notice delivery is fire-and-forget: a failed
/// send is logged and the registration still succeeds, while a failed
/// append aborts before any notice goes out.
#[derive(Clone)]
pub struct TaskRegistrar<R, D, N, C>
where
    R: TaskRepository,
    D: MemberDirectory,
    N: Notifier,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    directory: Arc<D>,
    notifier: Arc<N>,
    composer: NoticeComposer,
    clock: Arc<C>,
}

impl<R, D, N, C> TaskRegistrar<R, D, N, C>
where
    R: TaskRepository,
    D: MemberDirectory,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a new task registrar.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        directory: Arc<D>,
        notifier: Arc<N>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            directory,
            notifier,
            composer: NoticeComposer::new(),
            clock,
        }
    }

    /// Registers a new task on behalf of the signed-in member.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistrarError::Domain`] or
    /// [`TaskRegistrarError::Roster`] when a form field fails
    /// validation, [`TaskRegistrarError::UnknownAssignee`] when the
    /// assignee resolves to nobody on the roster, and
    /// [`TaskRegistrarError::Repository`] when the append fails. In
    /// every error case nothing has been persisted and no notice has
    /// been sent.
    pub async fn register(
        &self,
        session: &Session,
        request: RegisterTaskRequest,
    ) -> TaskRegistrarResult<TaskRecord> {
        let RegisterTaskRequest {
            name,
            assignee,
            expected_days,
        } = request;

        let task_name = TaskName::new(name)?;
        let assignee_name = MemberName::new(assignee)?;
        let expected = ExpectedDays::new(expected_days)?;

        let member = self
            .directory
            .lookup(&assignee_name)
            .ok_or_else(|| TaskRegistrarError::UnknownAssignee(assignee_name.clone()))?;

        let record = TaskRecord::new(task_name, assignee_name, expected, &*self.clock)?;
        self.repository.append(&record).await?;
        self.send_assignment_notices(session, &record, &member).await;
        Ok(record)
    }

    /// Fans out the assignment notices for a freshly appended record.
    ///
    /// Delivery failure is a soft failure: it is logged at warn level
    /// and never propagated.
    async fn send_assignment_notices(
        &self,
        session: &Session,
        record: &TaskRecord,
        assignee: &Member,
    ) {
        let registered_by = session.member().name().as_str();

        match self.composer.task_assigned(
            record.name().as_str(),
            registered_by,
            record.due_date(),
            record.expected_days().value(),
        ) {
            Ok(notice) => {
                if let Err(error) = self.notifier.notify(assignee.email(), &notice).await {
                    tracing::warn!(%error, recipient = %assignee.email(), "assignment notice failed");
                }
            }
            Err(error) => tracing::warn!(%error, "assignment notice composition failed"),
        }

        let Some(supervisor) = self.directory.supervisor() else {
            return;
        };

        match self.composer.task_logged(
            record.name().as_str(),
            record.assignee().as_str(),
            registered_by,
        ) {
            Ok(notice) => {
                if let Err(error) = self.notifier.notify(supervisor.email(), &notice).await {
                    tracing::warn!(%error, recipient = %supervisor.email(), "supervisor notice failed");
                }
            }
            Err(error) => tracing::warn!(%error, "supervisor notice composition failed"),
        }
    }
}
