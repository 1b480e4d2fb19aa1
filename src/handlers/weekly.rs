//! Weekly routine handlers: carry-over and cleanup

use crate::TaskStore;
use crate::todo::{CarriedTask, Task};
use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

impl TaskStore {
    /// Move last week's unfinished tasks to this week's Monday and save
    ///
    /// The file is only written when at least one task moved.
    pub fn carry_over(&mut self, today: NaiveDate) -> Result<Vec<CarriedTask>> {
        let carried = self.commit(|list| Ok(list.carry_over(today)))?;
        if !carried.is_empty() {
            info!(count = carried.len(), %today, "tasks carried over");
        }
        Ok(carried)
    }

    /// Purge completed tasks dated before this week's Monday and save
    ///
    /// The file is only written when at least one task was removed.
    pub fn cleanup_old_completed(&mut self, today: NaiveDate) -> Result<Vec<Task>> {
        let removed = self.commit(|list| Ok(list.cleanup_old_completed(today)))?;
        if !removed.is_empty() {
            info!(count = removed.len(), %today, "old completed tasks cleaned up");
        }
        Ok(removed)
    }
}
