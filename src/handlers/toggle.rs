//! Toggle-complete handler

use crate::TaskStore;
use crate::todo::TaskId;
use anyhow::Result;
use tracing::info;

impl TaskStore {
    /// Flip the completed flag of the selected tasks and save
    ///
    /// Unknown IDs are ignored. If nothing was flipped the file is not written.
    ///
    /// # Returns
    /// IDs of the tasks that changed
    pub fn toggle_complete(&mut self, ids: &[TaskId]) -> Result<Vec<TaskId>> {
        let toggled = self.commit(|list| Ok(list.toggle_complete(ids)))?;
        if !toggled.is_empty() {
            info!(count = toggled.len(), "tasks toggled");
        }
        Ok(toggled)
    }
}
