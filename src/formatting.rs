//! Formatting helper functions for command-line output
//!
//! This module turns tasks and operation results into display strings.

use crate::todo::{CarriedTask, Rank, Task, TaskId};

/// Marker shown next to the rank column so A/B/C stand out
fn rank_marker(task: &Task) -> &'static str {
    if task.completed {
        return "  ";
    }
    match task.rank {
        Some(Rank::A) => "!!",
        Some(Rank::B) => "! ",
        Some(Rank::C) | None => "  ",
    }
}

/// Format one task as a single display line
///
/// Columns: status, ID, date, rank, text.
pub fn format_task_line(task: &Task) -> String {
    format!(
        "[{}] {:>4}  {:<10}  {:<3}{} {}",
        task.status_marker(),
        task.id.to_string(),
        task.date_label(),
        task.rank_label(),
        rank_marker(task),
        task.text
    )
}

/// Format a view into a display string
///
/// # Arguments
/// * `tasks` - Tasks in display order
///
/// # Returns
/// Formatted string representation of the tasks
pub fn format_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for task in tasks {
        result.push_str(&format_task_line(task));
        result.push('\n');
    }
    result
}

/// Summary of a carry-over run
pub fn format_carry_over(carried: &[CarriedTask]) -> String {
    if carried.is_empty() {
        return "No unfinished tasks from last week.".to_string();
    }

    let mut result = format!("Carried {} task(s) over to this week:\n", carried.len());
    for task in carried {
        result.push_str(&format!(
            "\n- {} {} (was {})",
            task.id, task.text, task.from_date
        ));
    }
    result
}

/// Summary of a cleanup run
pub fn format_cleanup(removed: &[Task]) -> String {
    if removed.is_empty() {
        return "No completed tasks from previous weeks.".to_string();
    }
    format!(
        "Removed {} completed task(s) from previous weeks",
        removed.len()
    )
}

pub fn format_deleted(removed: &[Task]) -> String {
    let ids: Vec<String> = removed.iter().map(|t| t.id.to_string()).collect();
    format!("Deleted {} task(s): {}", removed.len(), ids.join(", "))
}

pub fn format_toggled(toggled: &[TaskId]) -> String {
    if toggled.is_empty() {
        return "No matching tasks".to_string();
    }
    let ids: Vec<String> = toggled.iter().map(TaskId::to_string).collect();
    format!("Toggled {} task(s): {}", toggled.len(), ids.join(", "))
}
