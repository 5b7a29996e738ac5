//! Service layer for bulk status reconciliation.

use crate::notify::ports::Notifier;
use crate::notify::services::NoticeComposer;
use crate::roster::domain::Session;
use crate::roster::ports::MemberDirectory;
use crate::task::domain::TaskRecord;
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for status reconciliation.
#[derive(Debug, Error)]
pub enum StatusReconcilerError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for status reconciliation operations.
pub type StatusReconcilerResult<T> = Result<T, StatusReconcilerError>;

/// Bulk status-edit reconciliation service.
///
/// The tracking grid submits the whole edited table at once rather than
/// per-row deltas. Each row is reconciled independently: entering
/// `Completed` with an empty stamp sets `completed_at` from the
/// injected clock, returning to `InProgress` clears it, every other
/// status leaves it untouched. The reconciled snapshot then replaces
/// the stored table wholesale, so the last full snapshot wins when two
/// editors interleave.
#[derive(Clone)]
pub struct StatusReconciler<R, D, N, C>
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

impl<R, D, N, C> StatusReconciler<R, D, N, C>
where
    R: TaskRepository,
    D: MemberDirectory,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a new status reconciler.
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

    /// Returns the current table for the grid to edit.
    ///
    /// # Errors
    ///
    /// Returns [`StatusReconcilerError::Repository`] when the table
    /// cannot be read.
    pub async fn snapshot(&self) -> StatusReconcilerResult<Vec<TaskRecord>> {
        Ok(self.repository.list_all().await?)
    }

    /// Reconciles an edited snapshot and persists it.
    ///
    /// Rows come back in submission order with only their completion
    /// stamps derived; reconciling the same snapshot twice under the
    /// same clock yields the same table. The supervisor is notified of
    /// the edit; delivery failure is logged and swallowed.
    ///
    /// # Errors
    ///
    /// Returns [`StatusReconcilerError::Repository`] when the
    /// overwrite fails; nothing is notified in that case.
    pub async fn reconcile(
        &self,
        session: &Session,
        edited: Vec<TaskRecord>,
    ) -> StatusReconcilerResult<Vec<TaskRecord>> {
        let mut rows = edited;
        for row in &mut rows {
            row.reconcile_completion(&*self.clock);
        }

        self.repository.replace_all(&rows).await?;
        self.send_update_notice(session).await;
        Ok(rows)
    }

    /// Notifies the supervisor that the board was edited.
    async fn send_update_notice(&self, session: &Session) {
        let Some(supervisor) = self.directory.supervisor() else {
            return;
        };

        match self
            .composer
            .board_updated(session.member().name().as_str())
        {
            Ok(notice) => {
                if let Err(error) = self.notifier.notify(supervisor.email(), &notice).await {
                    tracing::warn!(%error, recipient = %supervisor.email(), "board update notice failed");
                }
            }
            Err(error) => tracing::warn!(%error, "board update notice composition failed"),
        }
    }
}
