//! Task model definitions

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Task status, doubling as the kanban column a task sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Backlog,
    UpNext,
    InProgress,
    TopPriority,
    Done,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Backlog
    }
}

impl TaskStatus {
    /// All statuses in board column order
    pub const ALL: [TaskStatus; 5] = [
        Self::Backlog,
        Self::UpNext,
        Self::InProgress,
        Self::TopPriority,
        Self::Done,
    ];

    /// The stored label, e.g. `up-next`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::UpNext => "up-next",
            Self::InProgress => "in-progress",
            Self::TopPriority => "top-priority",
            Self::Done => "done",
        }
    }

    /// Column heading shown on the board
    pub fn title(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::UpNext => "Up Next",
            Self::InProgress => "In Progress",
            Self::TopPriority => "Top Priority",
            Self::Done => "Done",
        }
    }

    /// Position of this status in board column order
    pub fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or(Self::ALL.len())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::InvalidStatus(s.to_string()))
    }
}

/// A tracked unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub status: TaskStatus,
    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,
}

impl Task {
    /// Create a task stamped with the current local time
    pub(crate) fn new(id: u64, title: impl Into<String>, status: TaskStatus) -> Self {
        let now = now();
        Self {
            id,
            title: title.into(),
            status,
            created: now,
            updated: now,
        }
    }

    /// Move the task to another status, refreshing `updated`
    ///
    /// `updated` never moves backwards, even if the wall clock does.
    pub(crate) fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated = now().max(self.updated);
    }

    /// Case-insensitive substring match against the title
    pub fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Current local time, truncated to microseconds to match the on-disk format
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

/// Reject titles that are empty or only whitespace
pub fn validate_title(title: &str) -> Result<&str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput("Task title required".to_string()));
    }
    Ok(trimmed)
}
