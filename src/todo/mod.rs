//! To-do domain models and business logic
//!
//! This module contains the core task data structures and their implementations.
//! It is split into submodules:
//! - `task`: The task record, its ID and rank
//! - `todo_list`: Main list container with all mutating operations
//! - `week`: Monday–Sunday week windows
//! - `queries`: View filtering and sorting
//! - `serde_impl`: Serialization/deserialization implementations

mod queries;
mod serde_impl;
mod task;
mod todo_list;
mod week;

// Re-export all public types
pub use queries::{SortColumn, ViewMode, filter_and_sort, sort_by_column};
pub use task::{
    DATE_FORMAT, MISSING_DATE_SORT_KEY, NOT_AVAILABLE, Rank, Task, TaskId, local_date_today,
};
pub use todo_list::{CarriedTask, TodoList};
pub use week::Week;
