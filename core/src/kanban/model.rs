//! Kanban board model definitions
//!
//! These types are designed to be compatible with the board page's expected format.

use serde::Serialize;

use crate::task::{Task, TaskStatus};

/// A column in the kanban board
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanColumn {
    pub id: TaskStatus,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl KanbanColumn {
    fn new(status: TaskStatus) -> Self {
        Self {
            id: status,
            title: status.title().to_string(),
            tasks: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// The complete kanban board, one column per status
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanBoard {
    pub columns: Vec<KanbanColumn>,
    pub total: usize,
}

impl Default for KanbanBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl KanbanBoard {
    /// Create an empty board with every column present
    pub fn new() -> Self {
        Self {
            columns: TaskStatus::ALL.into_iter().map(KanbanColumn::new).collect(),
            total: 0,
        }
    }

    /// Group tasks into columns, keeping their relative order
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::new();
        for task in tasks {
            board.add_task(task);
        }
        board
    }

    /// Append a task to the column for its status
    pub fn add_task(&mut self, task: Task) {
        if let Some(column) = self.columns.get_mut(task.status.position()) {
            column.tasks.push(task);
            self.total += 1;
        }
    }

    /// Get the column for a status
    pub fn column(&self, status: TaskStatus) -> Option<&KanbanColumn> {
        self.columns.get(status.position())
    }

    /// Columns holding at least one task, in board order
    pub fn non_empty_columns(&self) -> impl Iterator<Item = &KanbanColumn> {
        self.columns.iter().filter(|c| !c.is_empty())
    }
}
