//! View selection and ordering
//!
//! These functions decide which tasks are shown and in what order. They never
//! mutate the list; callers get owned copies they are free to re-sort.

use super::task::Task;
use super::todo_list::TodoList;
use super::week::Week;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Which tasks a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Every task
    All,
    /// Tasks dated within the current Monday–Sunday week
    #[default]
    #[serde(alias = "this-week")]
    ThisWeek,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ViewMode::All),
            "this_week" | "this-week" => Ok(ViewMode::ThisWeek),
            _ => Err(format!(
                "Invalid view '{}'. Valid views: all, this_week",
                s
            )),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::All => f.write_str("all"),
            ViewMode::ThisWeek => f.write_str("this_week"),
        }
    }
}

/// Display column used by [`sort_by_column`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Status,
    Text,
    Date,
    Rank,
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(SortColumn::Status),
            "text" | "task" => Ok(SortColumn::Text),
            "date" => Ok(SortColumn::Date),
            "rank" => Ok(SortColumn::Rank),
            _ => Err(format!(
                "Invalid sort column '{}'. Valid columns: status, text, date, rank",
                s
            )),
        }
    }
}

impl SortColumn {
    fn value<'a>(&self, task: &'a Task) -> &'a str {
        match self {
            SortColumn::Status => task.status_marker(),
            SortColumn::Text => &task.text,
            SortColumn::Date => task.date_label(),
            SortColumn::Rank => task.rank_label(),
        }
    }
}

/// Select the tasks for `mode` and sort them by date
///
/// In `ThisWeek` mode a task without a parsable date is dropped. Ordering
/// compares the raw date strings, with missing dates last; ties keep list
/// order.
pub fn filter_and_sort(tasks: &[Task], mode: ViewMode, today: NaiveDate) -> Vec<Task> {
    let mut selected: Vec<Task> = match mode {
        ViewMode::All => tasks.to_vec(),
        ViewMode::ThisWeek => {
            let week = Week::containing(today);
            tasks
                .iter()
                .filter(|t| t.parsed_date().is_some_and(|d| week.contains(d)))
                .cloned()
                .collect()
        }
    };

    selected.sort_by(|a, b| a.date_sort_key().cmp(b.date_sort_key()));
    selected
}

/// Re-sort a view by the displayed value of one column
pub fn sort_by_column(tasks: &mut [Task], column: SortColumn, reverse: bool) {
    tasks.sort_by(|a, b| {
        let ordering: Ordering = column.value(a).cmp(column.value(b));
        if reverse { ordering.reverse() } else { ordering }
    });
}

impl TodoList {
    /// Tasks to display for `mode`, sorted by date
    pub fn view(&self, mode: ViewMode, today: NaiveDate) -> Vec<Task> {
        filter_and_sort(&self.tasks, mode, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::{Rank, TaskId};

    fn task(id: u32, text: &str, date: Option<&str>, rank: Option<Rank>) -> Task {
        Task {
            id: TaskId(id),
            text: text.to_string(),
            completed: false,
            date: date.map(str::to_string),
            rank,
            ..Default::default()
        }
    }

    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    #[test]
    fn test_this_week_drops_last_sunday() {
        let tasks = vec![
            task(1, "Last Sunday", Some("2024-06-09"), None),
            task(2, "Thursday", Some("2024-06-13"), None),
        ];
        let view = filter_and_sort(&tasks, ViewMode::ThisWeek, wednesday());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].date.as_deref(), Some("2024-06-13"));
    }

    #[test]
    fn test_this_week_drops_missing_and_unparsable_dates() {
        let tasks = vec![
            task(1, "No date", None, None),
            task(2, "Garbage", Some("next week"), None),
            task(3, "Monday", Some("2024-06-10"), None),
        ];
        let view = filter_and_sort(&tasks, ViewMode::ThisWeek, wednesday());
        assert_eq!(view.iter().map(|t| t.id).collect::<Vec<_>>(), vec![TaskId(3)]);
    }

    #[test]
    fn test_all_sorts_by_date_with_missing_last() {
        let tasks = vec![
            task(1, "No date", None, None),
            task(2, "Later", Some("2024-07-01"), None),
            task(3, "Earlier", Some("2024-01-01"), None),
        ];
        let view = filter_and_sort(&tasks, ViewMode::All, wednesday());
        let ids: Vec<_> = view.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let tasks = vec![
            task(1, "First", Some("2024-06-10"), None),
            task(2, "Second", Some("2024-06-10"), None),
        ];
        let view = filter_and_sort(&tasks, ViewMode::All, wednesday());
        assert_eq!(view[0].id, TaskId(1));
        assert_eq!(view[1].id, TaskId(2));
    }

    #[test]
    fn test_sort_by_rank_column() {
        let mut tasks = vec![
            task(1, "c", Some("2024-06-10"), Some(Rank::C)),
            task(2, "none", Some("2024-06-10"), None),
            task(3, "a", Some("2024-06-10"), Some(Rank::A)),
        ];
        sort_by_column(&mut tasks, SortColumn::Rank, false);
        let ids: Vec<_> = tasks.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        sort_by_column(&mut tasks, SortColumn::Rank, true);
        let ids: Vec<_> = tasks.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_by_status_puts_open_tasks_first() {
        let mut done = task(1, "done", None, None);
        done.completed = true;
        let mut tasks = vec![done, task(2, "open", None, None)];
        sort_by_column(&mut tasks, SortColumn::Status, false);
        assert_eq!(tasks[0].id, TaskId(2));
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!("all".parse::<ViewMode>().unwrap(), ViewMode::All);
        assert_eq!("this_week".parse::<ViewMode>().unwrap(), ViewMode::ThisWeek);
        assert_eq!("this-week".parse::<ViewMode>().unwrap(), ViewMode::ThisWeek);
        assert!("today".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::default(), ViewMode::ThisWeek);
    }
}
