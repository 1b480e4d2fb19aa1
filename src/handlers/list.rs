//! List handler

use crate::TaskStore;
use crate::todo::{self, SortColumn, Task, ViewMode};
use chrono::NaiveDate;

impl TaskStore {
    /// Tasks to display for `mode`, sorted by date, then optionally by a column
    ///
    /// # Arguments
    /// * `mode` - Which tasks to show
    /// * `today` - Reference date for the current week
    /// * `sort` - Column and descending flag to re-sort the view by
    pub fn list(
        &self,
        mode: ViewMode,
        today: NaiveDate,
        sort: Option<(SortColumn, bool)>,
    ) -> Vec<Task> {
        let mut tasks = self.list.view(mode, today);
        if let Some((column, reverse)) = sort {
            todo::sort_by_column(&mut tasks, column, reverse);
        }
        tasks
    }
}
