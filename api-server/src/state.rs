//! Application state

use std::path::PathBuf;
use std::sync::Arc;

use taskboard_core::task::FileTaskStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_store: FileTaskStore,
}

impl AppState {
    /// Create a new AppState backed by the given tasks file
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                task_store: FileTaskStore::new(data_file),
            }),
        }
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &FileTaskStore {
        &self.inner.task_store
    }
}
