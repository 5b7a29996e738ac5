//! In-memory row table for task service tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::domain::TaskRecord;
use crate::task::ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

/// Thread-safe in-memory task row table.
///
/// Rows live in a plain vector in table order, matching the backing
/// flat-file store's shape. Cloning the store shares the table, which
/// is what the whole-snapshot overwrite semantics expect.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    rows: Arc<RwLock<Vec<TaskRecord>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn append(&self, record: &TaskRecord) -> TaskRepositoryResult<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|err| TaskRepositoryError::persistence(std::io::Error::other(err.to_string())))?;
        rows.push(record.clone());
        Ok(())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<TaskRecord>> {
        let rows = self
            .rows
            .read()
            .map_err(|err| TaskRepositoryError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(rows.clone())
    }

    async fn replace_all(&self, records: &[TaskRecord]) -> TaskRepositoryResult<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|err| TaskRepositoryError::persistence(std::io::Error::other(err.to_string())))?;
        *rows = records.to_vec();
        Ok(())
    }
}
