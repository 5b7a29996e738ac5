//! Repository port over the task row table.

use crate::task::domain::TaskRecord;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task row table persistence contract.
///
/// The table is an ordered sequence of rows with no row identifier;
/// rows are addressed positionally. The write primitives mirror the
/// backing store's own granularity: single-row append for
/// registration, and whole-snapshot overwrite for the reconciliation
/// pass. `replace_all` is last-write-wins over the entire table — two
/// interleaved writers silently overwrite each other's snapshot. A
/// stronger per-row model would slot in behind this trait without
/// touching the services.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Appends one record to the end of the table.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store
    /// cannot be written.
    async fn append(&self, record: &TaskRecord) -> TaskRepositoryResult<()>;

    /// Returns every record in table order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store
    /// cannot be read, or
    /// [`TaskRepositoryError::InvalidPersistedData`] when a stored row
    /// cannot be reconstructed into domain types.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<TaskRecord>>;

    /// Replaces the entire table with the given snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store
    /// cannot be written.
    async fn replace_all(&self, records: &[TaskRecord]) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a data-quality or deserialization error from stored rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
