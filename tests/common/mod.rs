//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use std::path::PathBuf;
use tempfile::TempDir;
use weekly_todo::TaskStore;

/// Create a store backed by a file in a fresh temporary directory
///
/// The directory is removed when the returned `TempDir` is dropped, so keep it
/// alive for the duration of the test.
pub fn get_test_store() -> (TaskStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = TaskStore::open(data_path(&dir)).unwrap();
    (store, dir)
}

/// Path of the task file inside a test directory
pub fn data_path(dir: &TempDir) -> PathBuf {
    dir.path().join("tasks.json")
}

/// Re-open the store from disk, as a fresh process would
pub fn reopen(dir: &TempDir) -> TaskStore {
    TaskStore::open(data_path(dir)).unwrap()
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Wednesday 2024-06-12; its week runs from 2024-06-10 to 2024-06-16
pub fn wednesday() -> NaiveDate {
    ymd(2024, 6, 12)
}
