//! CSV-backed task repository.

use async_trait::async_trait;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;
use std::sync::Arc;

use super::models::{HEADERS, TaskRow};
use crate::task::domain::TaskRecord;
use crate::task::ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

/// Flat-file task row table stored as a single CSV file.
///
/// The directory handle is capability-scoped: the store can only reach
/// the file it was created over. Registration appends one data row;
/// the reconciliation pass rewrites the whole file, so the last full
/// snapshot wins when two writers interleave.
#[derive(Debug, Clone)]
pub struct CsvTaskStore {
    dir: Arc<Dir>,
    file_name: String,
}

impl CsvTaskStore {
    /// Opens a store over an existing CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the file does
    /// not exist or cannot be inspected; a missing store file is fatal
    /// rather than silently treated as an empty table.
    pub fn open(dir: Dir, file_name: impl Into<String>) -> TaskRepositoryResult<Self> {
        let name = file_name.into();
        dir.metadata(&name).map_err(TaskRepositoryError::persistence)?;
        Ok(Self {
            dir: Arc::new(dir),
            file_name: name,
        })
    }

    /// Creates a store with a fresh header-only file.
    ///
    /// Any existing file of the same name is truncated.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the file
    /// cannot be written.
    pub fn create(dir: Dir, file_name: impl Into<String>) -> TaskRepositoryResult<Self> {
        let store = Self {
            dir: Arc::new(dir),
            file_name: file_name.into(),
        };
        write_snapshot(&store.dir, &store.file_name, &[])?;
        Ok(store)
    }
}

#[async_trait]
impl TaskRepository for CsvTaskStore {
    async fn append(&self, record: &TaskRecord) -> TaskRepositoryResult<()> {
        let row = TaskRow::from_domain(record);
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();

        run_blocking(move || {
            let file = dir
                .open_with(&file_name, OpenOptions::new().append(true))
                .map_err(TaskRepositoryError::persistence)?;
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(file);
            writer
                .serialize(&row)
                .map_err(TaskRepositoryError::persistence)?;
            writer.flush().map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<TaskRecord>> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();

        run_blocking(move || {
            let file = dir
                .open(&file_name)
                .map_err(TaskRepositoryError::persistence)?;
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(true)
                .from_reader(file);

            let mut records = Vec::new();
            for row in reader.deserialize::<TaskRow>() {
                let parsed = row.map_err(TaskRepositoryError::invalid_persisted_data)?;
                records.push(
                    parsed
                        .into_domain()
                        .map_err(TaskRepositoryError::invalid_persisted_data)?,
                );
            }
            Ok(records)
        })
        .await
    }

    async fn replace_all(&self, records: &[TaskRecord]) -> TaskRepositoryResult<()> {
        let rows: Vec<TaskRow> = records.iter().map(TaskRow::from_domain).collect();
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();

        run_blocking(move || write_snapshot(&dir, &file_name, &rows)).await
    }
}

/// Rewrites the whole file as a header row plus the given data rows.
fn write_snapshot(dir: &Dir, file_name: &str, rows: &[TaskRow]) -> TaskRepositoryResult<()> {
    let file = dir
        .create(file_name)
        .map_err(TaskRepositoryError::persistence)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer
        .write_record(HEADERS)
        .map_err(TaskRepositoryError::persistence)?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(TaskRepositoryError::persistence)?;
    }
    writer.flush().map_err(TaskRepositoryError::persistence)
}

/// Runs a blocking file operation on a dedicated thread pool.
///
/// Wraps the closure in [`tokio::task::spawn_blocking`] to prevent
/// blocking the async executor's worker threads.
async fn run_blocking<F, T>(f: F) -> TaskRepositoryResult<T>
where
    F: FnOnce() -> TaskRepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| {
            TaskRepositoryError::persistence(std::io::Error::other(format!(
                "task join error: {e}"
            )))
        })?
}
