//! Command-line interface for task
//!
//! This module defines the CLI structure using clap derive macros. Each
//! subcommand maps onto exactly one task store operation.

use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};

use taskboard_core::kanban::KanbanBoard;
use taskboard_core::task::{validate_title, FileTaskStore, TaskRepository, TaskStatus};

use crate::output;

const AFTER_HELP: &str = "\
STATUSES:
    backlog, up-next, in-progress, top-priority, done

EXAMPLES:
    task add \"Fix login bug\" in-progress
    task list
    task list in-progress
    task update 5 done
    task search website
    task delete 3";

/// task - Simple task tracking
///
/// Manage a personal task list stored in a JSON file shared with the web
/// board.
#[derive(Parser, Debug)]
#[command(name = "task")]
#[command(author, version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Path to the tasks file
    #[arg(long, global = true, env = "TASKBOARD_FILE", default_value = "tasks.json")]
    pub file: PathBuf,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task (default status: backlog)
    Add {
        /// Task title
        title: String,

        /// Initial status
        status: Option<TaskStatus>,
    },

    /// List all tasks grouped by status, or only tasks with the given status
    List {
        /// Only show tasks with this status
        status: Option<TaskStatus>,
    },

    /// Move a task to a new status
    Update {
        /// Task ID
        id: u64,

        /// New status
        status: TaskStatus,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
    },

    /// Search tasks by title (case-insensitive)
    Search {
        /// Text to look for in task titles
        query: String,
    },
}

impl Cli {
    /// Run the parsed command against the tasks file
    pub async fn run(self) -> anyhow::Result<()> {
        let Some(command) = self.command else {
            Self::command()
                .print_help()
                .context("Failed to print help")?;
            return Ok(());
        };

        let store = FileTaskStore::new(&self.file);
        tracing::debug!("Using tasks file {:?}", store.path());

        match command {
            Commands::Add { title, status } => {
                let title = validate_title(&title)?;
                let task = store.create(title, status.unwrap_or_default()).await?;
                tracing::info!("Created task #{}", task.id);
                if self.json {
                    output::print_json(&task)?;
                } else {
                    println!("{}", output::added(&task));
                }
            }

            Commands::List { status } => {
                let tasks = store.list(status).await?;
                if self.json {
                    output::print_json(&tasks)?;
                } else {
                    match status {
                        Some(status) => print!("{}", output::status_section(status, &tasks)),
                        None => print!("{}", output::grouped(&KanbanBoard::from_tasks(tasks))),
                    }
                }
            }

            Commands::Update { id, status } => {
                let task = store.update_status(id, status).await?;
                tracing::info!("Moved task #{} to {}", id, status);
                if self.json {
                    output::print_json(&task)?;
                } else {
                    println!("{}", output::updated(&task));
                }
            }

            Commands::Delete { id } => {
                let task = store.delete(id).await?;
                tracing::info!("Deleted task #{}", id);
                if self.json {
                    output::print_json(&task)?;
                } else {
                    println!("{}", output::deleted(&task));
                }
            }

            Commands::Search { query } => {
                let tasks = store.search(&query).await?;
                if self.json {
                    output::print_json(&tasks)?;
                } else {
                    print!("{}", output::search_results(&tasks));
                }
            }
        }

        Ok(())
    }
}
