//! Add handler

use crate::TaskStore;
use crate::todo::TaskId;
use anyhow::Result;
use tracing::info;

impl TaskStore {
    /// Append a new incomplete task and save
    ///
    /// # Arguments
    /// * `text` - Task description (must not be blank)
    /// * `date` - Date in YYYY-MM-DD format
    /// * `rank` - A, B or C (case-insensitive)
    ///
    /// # Returns
    /// The new task's ID, or a [`crate::TodoError`] if any field is invalid
    pub fn add_task(&mut self, text: &str, date: &str, rank: &str) -> Result<TaskId> {
        let id = self.commit(|list| list.add(text, date, rank))?;
        info!(%id, "task added");
        Ok(id)
    }
}
