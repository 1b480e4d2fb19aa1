//! Validation helper functions for task input
//!
//! This module contains the checks shared by `add` and `edit`: required
//! fields, date parsing and rank parsing.

use crate::error::TodoError;
use crate::todo::{DATE_FORMAT, Rank};
use chrono::NaiveDate;

/// Task fields that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    pub text: String,
    pub date: NaiveDate,
    pub rank: Rank,
}

/// Parse and validate a date parameter
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, TodoError> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)
        .map_err(|_| TodoError::InvalidDate(date_str.to_string()))
}

/// Parse and validate a rank parameter (A, B or C, case-insensitive)
pub fn parse_rank(rank_str: &str) -> Result<Rank, TodoError> {
    rank_str
        .parse::<Rank>()
        .map_err(|_| TodoError::InvalidRank(rank_str.to_string()))
}

/// Validate the three user-supplied task fields
///
/// Blank fields are reported before format problems, so an empty date reads
/// as "required" rather than "invalid".
///
/// # Arguments
/// * `text` - Task description
/// * `date` - Date string in YYYY-MM-DD format
/// * `rank` - Rank string (A, B or C)
///
/// # Returns
/// The validated input, or the first problem found
pub fn validate_task_input(text: &str, date: &str, rank: &str) -> Result<TaskInput, TodoError> {
    if text.trim().is_empty() {
        return Err(TodoError::MissingField("task"));
    }
    if date.trim().is_empty() {
        return Err(TodoError::MissingField("date"));
    }
    if rank.trim().is_empty() {
        return Err(TodoError::MissingField("rank"));
    }

    Ok(TaskInput {
        text: text.to_string(),
        date: parse_date(date)?,
        rank: parse_rank(rank)?,
    })
}
