//! Human-readable output for task CLI commands.

use std::fmt::Write;

use serde::Serialize;

use taskboard_core::kanban::KanbanBoard;
use taskboard_core::task::{Task, TaskStatus};

pub fn added(task: &Task) -> String {
    format!("✓ Added task #{}: {}", task.id, task.title)
}

pub fn updated(task: &Task) -> String {
    format!("✓ Updated task #{} to {}", task.id, task.status)
}

pub fn deleted(task: &Task) -> String {
    format!("✓ Deleted task #{}", task.id)
}

pub fn failure(err: &anyhow::Error) -> String {
    format!("✗ {:#}", err)
}

fn section(out: &mut String, heading: &str, count: usize) {
    let _ = writeln!(out, "\n=== {} ({}) ===", heading, count);
}

/// Listing for a single status; the heading is shown even with no matches
pub fn status_section(status: TaskStatus, tasks: &[Task]) -> String {
    let mut out = String::new();
    section(&mut out, &status.as_str().to_uppercase(), tasks.len());
    for task in tasks {
        let _ = writeln!(out, "  #{}: {}", task.id, task.title);
    }
    out
}

/// Listing for every status, skipping empty columns
pub fn grouped(board: &KanbanBoard) -> String {
    if board.total == 0 {
        return "No tasks yet. Add one with `task add <title>`.\n".to_string();
    }

    board
        .non_empty_columns()
        .map(|column| status_section(column.id, &column.tasks))
        .collect()
}

pub fn search_results(tasks: &[Task]) -> String {
    let mut out = String::new();
    section(&mut out, "SEARCH RESULTS", tasks.len());
    for task in tasks {
        let _ = writeln!(out, "  #{}: {} [{}]", task.id, task.title, task.status);
    }
    out
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(id: u64, title: &str, status: TaskStatus) -> Task {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Task {
            id,
            title: title.to_string(),
            status,
            created: at,
            updated: at,
        }
    }

    #[test]
    fn confirmations() {
        let t = task(3, "Write docs", TaskStatus::Done);
        assert_eq!(added(&t), "✓ Added task #3: Write docs");
        assert_eq!(updated(&t), "✓ Updated task #3 to done");
        assert_eq!(deleted(&t), "✓ Deleted task #3");
    }

    #[test]
    fn failure_prefixes_message() {
        let err = anyhow::Error::new(taskboard_core::Error::TaskNotFound(99));
        assert_eq!(failure(&err), "✗ Task #99 not found");
    }

    #[test]
    fn status_section_shows_empty_heading() {
        assert_eq!(
            status_section(TaskStatus::TopPriority, &[]),
            "\n=== TOP-PRIORITY (0) ===\n"
        );
    }

    #[test]
    fn grouped_skips_empty_columns() {
        let board = KanbanBoard::from_tasks(vec![
            task(1, "Fix login bug", TaskStatus::InProgress),
            task(2, "Write docs", TaskStatus::Backlog),
        ]);

        assert_eq!(
            grouped(&board),
            "\n=== BACKLOG (1) ===\n  #2: Write docs\n\n=== IN-PROGRESS (1) ===\n  #1: Fix login bug\n"
        );
    }

    #[test]
    fn grouped_empty_board() {
        assert!(grouped(&KanbanBoard::new()).starts_with("No tasks yet"));
    }

    #[test]
    fn search_results_include_status() {
        let out = search_results(&[task(1, "Fix login bug", TaskStatus::InProgress)]);
        assert_eq!(
            out,
            "\n=== SEARCH RESULTS (1) ===\n  #1: Fix login bug [in-progress]\n"
        );
    }
}
