//! Core library for Taskboard
//!
//! This crate contains the task store shared by the CLI and the web board:
//! - Task model and status vocabulary
//! - File-backed task storage
//! - Kanban board grouping

pub mod error;
pub mod kanban;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
