//! File-based task storage implementation
//!
//! Stores tasks as a JSON array in a single file. Every operation reloads the
//! whole file and every mutation rewrites it.

use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::model::{Task, TaskStatus};
use super::repository::TaskRepository;
use crate::{Error, Result};

/// File-based task store using JSON
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
    /// Serializes each load-mutate-save sequence within this process
    lock: Mutex<()>,
}

impl FileTaskStore {
    /// Create a new FileTaskStore
    ///
    /// The file is not touched until the first operation. A missing file reads
    /// as an empty collection and is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection from disk
    async fn load(&self) -> Result<Vec<Task>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            let detail = unknown_status_record(&content).unwrap_or_else(|| e.to_string());
            Error::Storage(format!("Failed to parse {}: {}", self.path.display(), detail))
        })
    }

    /// Rewrite the full collection to disk
    ///
    /// Writes to a sibling temp file first, then renames it over the target.
    async fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks)
            .map_err(|e| Error::Storage(format!("Failed to serialize tasks: {}", e)))?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::Storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let temp_path = self.temp_path();
        let write_err =
            |e: std::io::Error| Error::Storage(format!("Failed to write {}: {}", temp_path.display(), e));
        let mut file = tokio::fs::File::create(&temp_path).await.map_err(write_err)?;
        file.write_all(content.as_bytes()).await.map_err(write_err)?;
        file.sync_all().await.map_err(write_err)?;
        drop(file);

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            Error::Storage(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("tasks.json"));
        name.push(format!(".tmp.{}", std::process::id()));
        self.path.with_file_name(name)
    }
}

/// Next id is recomputed from the current collection, so the highest id is
/// reused after it is deleted.
fn next_id(tasks: &[Task]) -> Result<u64> {
    let max = tasks.iter().map(|t| t.id).max().unwrap_or(0);
    max.checked_add(1)
        .ok_or_else(|| Error::Storage(format!("No task id left after #{}", max)))
}

/// Find the first record whose status is outside the known set
fn unknown_status_record(content: &str) -> Option<String> {
    let records: Vec<serde_json::Value> = serde_json::from_str(content).ok()?;
    records.iter().find_map(|record| {
        let status = record.get("status")?.as_str()?;
        if status.parse::<TaskStatus>().is_ok() {
            return None;
        }
        let id = record
            .get("id")
            .map(|id| id.to_string())
            .unwrap_or_else(|| "?".to_string());
        Some(format!("task #{} has unknown status '{}'", id, status))
    })
}

#[async_trait]
impl TaskRepository for FileTaskStore {
    async fn create(&self, title: &str, status: TaskStatus) -> Result<Task> {
        let _guard = self.lock.lock().await;
        let mut tasks = self.load().await?;

        let task = Task::new(next_id(&tasks)?, title, status);
        tasks.push(task.clone());

        self.save(&tasks).await?;
        Ok(task)
    }

    async fn get(&self, id: u64) -> Result<Task> {
        let _guard = self.lock.lock().await;
        self.load()
            .await?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))
    }

    async fn list(&self, status: Option<TaskStatus>) -> Result<Vec<Task>> {
        let _guard = self.lock.lock().await;
        let mut tasks = self.load().await?;

        match status {
            Some(status) => tasks.retain(|t| t.status == status),
            // Stable sort keeps collection order within each column
            None => tasks.sort_by_key(|t| t.status.position()),
        }
        Ok(tasks)
    }

    async fn update_status(&self, id: u64, status: TaskStatus) -> Result<Task> {
        let _guard = self.lock.lock().await;
        let mut tasks = self.load().await?;

        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        task.set_status(status);
        let updated = task.clone();

        self.save(&tasks).await?;
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> Result<Task> {
        let _guard = self.lock.lock().await;
        let mut tasks = self.load().await?;

        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        let removed = tasks.remove(index);

        self.save(&tasks).await?;
        Ok(removed)
    }

    async fn search(&self, query: &str) -> Result<Vec<Task>> {
        let _guard = self.lock.lock().await;
        let mut tasks = self.load().await?;
        tasks.retain(|t| t.matches(query));
        Ok(tasks)
    }
}
