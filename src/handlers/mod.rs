//! Store operations
//!
//! Each file adds one group of `TaskStore` methods. Mutating methods run the
//! domain operation on a copy of the list through `TaskStore::commit`, so the
//! in-memory list only changes once the task file has been rewritten.

pub mod add;
pub mod delete;
pub mod list;
pub mod toggle;
pub mod update;
pub mod weekly;
