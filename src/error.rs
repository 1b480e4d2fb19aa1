//! Domain errors for the to-do list
//!
//! Every variant is a user-facing warning: the operation that produced it was
//! aborted before touching the list, so the caller can show the message and let
//! the user correct the input.

use crate::todo::TaskId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("The {0} field is required. Fill in the task, date and rank.")]
    MissingField(&'static str),
    #[error("Invalid date '{0}'. Use YYYY-MM-DD (e.g., '2025-03-15')")]
    InvalidDate(String),
    #[error("Invalid rank '{0}'. Valid ranks: A, B, C")]
    InvalidRank(String),
    #[error("Task {0} not found")]
    NotFound(TaskId),
    #[error("Select at least one task to {0}")]
    EmptySelection(&'static str),
    #[error("No task IDs left; the highest ID is already {}", u32::MAX)]
    IdsExhausted,
    #[error("The task file could not be read; saving now would overwrite it. Use --force to start over with an empty list.")]
    CorruptStore,
}
