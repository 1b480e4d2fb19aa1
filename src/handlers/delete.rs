//! Delete handler

use crate::TaskStore;
use crate::todo::{Task, TaskId};
use anyhow::Result;
use tracing::info;

impl TaskStore {
    /// Remove the selected tasks and save
    ///
    /// An empty selection, or one where no ID exists, is reported as a
    /// [`crate::TodoError`] and nothing is written.
    ///
    /// # Returns
    /// The removed tasks
    pub fn delete_tasks(&mut self, ids: &[TaskId]) -> Result<Vec<Task>> {
        let removed = self.commit(|list| list.delete(ids))?;
        info!(count = removed.len(), "tasks deleted");
        Ok(removed)
    }
}
