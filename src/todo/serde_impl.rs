//! Serialization and deserialization implementations for TodoList
//!
//! On disk a list is a bare JSON array of task objects. Reading goes through
//! [`TaskRecord`] so files from older versions load with defaults and fresh IDs.

use super::todo_list::TodoList;
use crate::migration::{TaskRecord, records_into_tasks};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for TodoList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.tasks)
    }
}

impl<'de> Deserialize<'de> for TodoList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<TaskRecord>::deserialize(deserializer)?;
        let (tasks, task_counter) = records_into_tasks(records).map_err(D::Error::custom)?;
        Ok(TodoList {
            tasks,
            task_counter,
        })
    }
}
