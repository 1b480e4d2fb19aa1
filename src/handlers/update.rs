//! Edit handler

use crate::TaskStore;
use crate::todo::TaskId;
use anyhow::Result;
use tracing::info;

impl TaskStore {
    /// Replace text, date and rank of one task and save
    ///
    /// Validation is the same as for [`TaskStore::add_task`]. The completed
    /// flag is not changed.
    pub fn edit_task(&mut self, id: TaskId, text: &str, date: &str, rank: &str) -> Result<()> {
        self.commit(|list| list.edit(id, text, date, rank))?;
        info!(%id, "task edited");
        Ok(())
    }
}
