//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Task #{0} not found")]
    TaskNotFound(u64),

    #[error("Unknown status '{0}' (expected one of: backlog, up-next, in-progress, top-priority, done)")]
    InvalidStatus(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Whether the error references a task id absent from the collection
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound(_))
    }

    /// Whether the error was raised by user input rather than the store
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidStatus(_) | Self::InvalidInput(_))
    }
}
