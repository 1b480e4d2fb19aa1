//! Weekly To-Do Library
//!
//! A to-do list of ranked, dated tasks persisted to a local JSON file, with a
//! weekly routine: unfinished tasks from last week can be carried over to this
//! week, and completed tasks from before this week are cleaned up.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Store Layer**: `TaskStore` - Owns the list and persists every mutation
//! - **Domain Layer**: `todo` module - Task model, list operations and views
//! - **Persistence Layer**: `storage` module - Whole-file JSON reads and writes
//!
//! # Example
//!
//! ```no_run
//! use weekly_todo::{TaskStore, ViewMode, local_date_today};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut store = TaskStore::open("tasks.json")?;
//!     store.add_task("Buy milk", "2024-06-10", "A")?;
//!     for task in store.list(ViewMode::All, local_date_today(), None) {
//!         println!("{} {}", task.id, task.text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod formatting;
pub mod handlers;
pub mod migration;
pub mod storage;
pub mod todo;
pub mod validation;

use anyhow::Result;
use std::path::Path;
use tracing::{debug, warn};

// Re-export commonly used types
pub use config::Config;
pub use error::TodoError;
pub use storage::{LoadOutcome, Storage};
pub use todo::{
    CarriedTask, Rank, SortColumn, Task, TaskId, TodoList, ViewMode, Week, filter_and_sort,
    local_date_today, sort_by_column,
};

/// Task list bound to its JSON file
///
/// Every successful mutation rewrites the whole file. A mutation rejected by
/// validation, or one whose write fails, leaves both the list and the file
/// untouched.
pub struct TaskStore {
    pub(crate) list: TodoList,
    pub(crate) storage: Storage,
    corruption: Option<String>,
}

impl TaskStore {
    /// Open the store backed by `storage_path`
    ///
    /// A missing file gives an empty store. So does a file that cannot be
    /// decoded; in that case [`TaskStore::corruption`] reports why, and every
    /// write fails with [`TodoError::CorruptStore`] until
    /// [`TaskStore::discard_corruption`] is called.
    ///
    /// # Example
    /// ```no_run
    /// # use weekly_todo::TaskStore;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let store = TaskStore::open("tasks.json")?;
    /// if let Some(reason) = store.corruption() {
    ///     eprintln!("tasks.json was unreadable: {reason}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn open(storage_path: impl AsRef<Path>) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let (list, corruption) = match storage.load()? {
            LoadOutcome::Corrupt { reason } => (TodoList::new(), Some(reason)),
            outcome => (outcome.into_list(), None),
        };
        Ok(Self {
            list,
            storage,
            corruption,
        })
    }

    /// Why the file could not be decoded when the store was opened, if it could not
    pub fn corruption(&self) -> Option<&str> {
        self.corruption.as_deref()
    }

    /// Give up on an unreadable file so the next save may replace it
    ///
    /// # Returns
    /// The decode error that was being held, if any
    pub fn discard_corruption(&mut self) -> Option<String> {
        let reason = self.corruption.take();
        if let Some(reason) = &reason {
            warn!(path = %self.path().display(), %reason, "unreadable task file will be replaced");
        }
        reason
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    /// All tasks in stored order
    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.list.get(id)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Write the current list to disk
    pub fn save(&self) -> Result<()> {
        self.write(&self.list)
    }

    fn write(&self, list: &TodoList) -> Result<()> {
        if self.corruption.is_some() {
            return Err(TodoError::CorruptStore.into());
        }
        self.storage.save(list)?;
        debug!(tasks = list.len(), "store saved");
        Ok(())
    }

    /// Apply `op` to a copy of the list and keep the copy once it is on disk
    ///
    /// Nothing is written when `op` fails or leaves the list as it was.
    pub(crate) fn commit<T>(
        &mut self,
        op: impl FnOnce(&mut TodoList) -> Result<T, TodoError>,
    ) -> Result<T> {
        let mut next = self.list.clone();
        let value = op(&mut next)?;
        if next != self.list {
            self.write(&next)?;
            self.list = next;
        }
        Ok(value)
    }
}
