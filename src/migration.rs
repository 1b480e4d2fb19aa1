//! Reading task files written by older versions
//!
//! Three record shapes exist in the wild:
//! - `{text, completed}`: the first version, no date or rank
//! - `{text, completed, date, rank}`: no stable ID, `rank` may be `"N/A"`
//! - `{id, text, completed, date, rank}`: the current shape
//!
//! Every key is optional on read. Records without a usable ID get one after all
//! persisted IDs are accounted for, so existing IDs never change.

use crate::error::TodoError;
use crate::todo::{Rank, Task, TaskId};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// One task object as it appears in the JSON file, any version
///
/// An explicit `null` reads the same as a missing key. Keys not listed here
/// are collected into `extra` so they survive the next save.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskRecord {
    pub id: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub completed: bool,
    pub date: Option<String>,
    pub rank: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a persisted rank leniently; unknown values such as "N/A" become `None`
pub fn rank_from_record(rank: Option<&str>) -> Option<Rank> {
    rank.and_then(|r| r.parse::<Rank>().ok())
}

/// Convert records into tasks, assigning IDs where needed
///
/// Fails with [`TodoError::IdsExhausted`] when a record needs a new ID but the
/// highest persisted ID is already `u32::MAX`.
///
/// # Returns
/// The tasks in file order and the highest ID in use
pub fn records_into_tasks(records: Vec<TaskRecord>) -> Result<(Vec<Task>, u32), TodoError> {
    // First pass: keep the first occurrence of every positive ID
    let mut seen = HashSet::new();
    let keep_id: Vec<bool> = records
        .iter()
        .map(|r| matches!(r.id, Some(id) if id > 0 && seen.insert(id)))
        .collect();

    let mut counter = seen.iter().copied().max().unwrap_or(0);

    let mut tasks = Vec::with_capacity(records.len());
    for (record, keep) in records.into_iter().zip(keep_id) {
        let id = match record.id {
            Some(id) if keep => TaskId(id),
            _ => {
                counter = counter.checked_add(1).ok_or(TodoError::IdsExhausted)?;
                TaskId(counter)
            }
        };
        tasks.push(Task {
            id,
            text: record.text,
            completed: record.completed,
            rank: rank_from_record(record.rank.as_deref()),
            date: record.date,
            extra: record.extra,
        });
    }

    Ok((tasks, counter))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: Option<u32>, text: &str) -> TaskRecord {
        TaskRecord {
            id,
            text: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_ids_assigned_in_file_order() {
        let (tasks, counter) =
            records_into_tasks(vec![record(None, "a"), record(None, "b")]).unwrap();
        assert_eq!(tasks[0].id, TaskId(1));
        assert_eq!(tasks[1].id, TaskId(2));
        assert_eq!(counter, 2);
    }

    #[test]
    fn test_existing_ids_are_kept_and_new_ones_follow() {
        let (tasks, counter) = records_into_tasks(vec![
            record(None, "new"),
            record(Some(7), "old"),
            record(Some(3), "older"),
        ])
        .unwrap();
        assert_eq!(tasks[0].id, TaskId(8));
        assert_eq!(tasks[1].id, TaskId(7));
        assert_eq!(tasks[2].id, TaskId(3));
        assert_eq!(counter, 8);
    }

    #[test]
    fn test_duplicate_and_zero_ids_are_reassigned() {
        let (tasks, counter) = records_into_tasks(vec![
            record(Some(2), "first"),
            record(Some(2), "dup"),
            record(Some(0), "zero"),
        ])
        .unwrap();
        assert_eq!(tasks[0].id, TaskId(2));
        assert_eq!(tasks[1].id, TaskId(3));
        assert_eq!(tasks[2].id, TaskId(4));
        assert_eq!(counter, 4);
    }

    #[test]
    fn test_rank_from_record() {
        assert_eq!(rank_from_record(Some("a")), Some(Rank::A));
        assert_eq!(rank_from_record(Some("N/A")), None);
        assert_eq!(rank_from_record(None), None);
    }

    #[test]
    fn test_new_id_past_u32_max_is_an_error() {
        let result = records_into_tasks(vec![record(Some(u32::MAX), "last"), record(None, "b")]);
        assert_eq!(result.unwrap_err(), TodoError::IdsExhausted);

        let (tasks, counter) = records_into_tasks(vec![record(Some(u32::MAX), "last")]).unwrap();
        assert_eq!(tasks[0].id, TaskId(u32::MAX));
        assert_eq!(counter, u32::MAX);
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let json = r#"[{"text": null, "completed": null, "date": null, "rank": null, "id": null}]"#;
        let records: Vec<TaskRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].text, "");
        assert!(!records[0].completed);
        assert_eq!(records[0].date, None);
        assert_eq!(records[0].id, None);
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let json = r#"[{"text": "a", "completed": false, "note": "from phone", "tags": ["x"]}]"#;
        let records: Vec<TaskRecord> = serde_json::from_str(json).unwrap();
        let (tasks, _) = records_into_tasks(records).unwrap();
        assert_eq!(tasks[0].extra.get("note"), Some(&Value::from("from phone")));
        assert!(tasks[0].extra.contains_key("tags"));
        assert!(!tasks[0].extra.contains_key("text"));
    }
}
