//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::{Task, TaskStatus};
use crate::Result;

/// Repository interface for task operations
///
/// Every call works against a fresh view of storage; nothing is cached
/// between calls.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task with the next free id
    async fn create(&self, title: &str, status: TaskStatus) -> Result<Task>;

    /// Get a task by ID
    async fn get(&self, id: u64) -> Result<Task>;

    /// List tasks with the given status, or all tasks grouped in column order
    async fn list(&self, status: Option<TaskStatus>) -> Result<Vec<Task>>;

    /// Move a task to a new status
    async fn update_status(&self, id: u64, status: TaskStatus) -> Result<Task>;

    /// Delete a task by ID, returning the removed task
    async fn delete(&self, id: u64) -> Result<Task>;

    /// Find tasks whose title contains `query`, ignoring case
    async fn search(&self, query: &str) -> Result<Vec<Task>>;
}
