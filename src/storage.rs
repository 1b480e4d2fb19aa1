use crate::todo::TodoList;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of reading the task file
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file was read and decoded (an empty or blank file counts as an empty list)
    Loaded(TodoList),
    /// No file exists yet
    Missing,
    /// The file exists but is not a valid task list
    Corrupt { reason: String },
}

impl LoadOutcome {
    /// The loaded list, or an empty one if the file was missing or corrupt
    pub fn into_list(self) -> TodoList {
        match self {
            LoadOutcome::Loaded(list) => list,
            LoadOutcome::Missing | LoadOutcome::Corrupt { .. } => TodoList::new(),
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, LoadOutcome::Corrupt { .. })
    }
}

pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read the whole task file
    ///
    /// Decode failures are not errors: they come back as [`LoadOutcome::Corrupt`]
    /// so the caller can decide how loudly to report them. I/O failures other
    /// than a missing file are errors.
    pub fn load(&self) -> Result<LoadOutcome> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "task file not found, starting empty");
                return Ok(LoadOutcome::Missing);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("read {}", self.file_path.display()));
            }
        };

        if content.trim().is_empty() {
            return Ok(LoadOutcome::Loaded(TodoList::new()));
        }

        match serde_json::from_str::<TodoList>(&content) {
            Ok(list) => {
                debug!(path = %self.file_path.display(), tasks = list.len(), "loaded tasks");
                Ok(LoadOutcome::Loaded(list))
            }
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "task file is not a valid task list");
                Ok(LoadOutcome::Corrupt {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Overwrite the task file with the whole list as a pretty-printed JSON array
    pub fn save(&self, data: &TodoList) -> Result<()> {
        let mut content = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut content, PrettyFormatter::with_indent(b"    "));
        data.serialize(&mut serializer)
            .context("serialize task list")?;
        content.push(b'\n');

        fs::write(&self.file_path, content)
            .with_context(|| format!("write {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), tasks = data.len(), "saved tasks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("tasks.json"));
        let outcome = storage.load().unwrap();
        assert!(matches!(outcome, LoadOutcome::Missing));
        assert!(outcome.into_list().is_empty());
    }

    #[test]
    fn test_load_blank_file_is_empty_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "  \n").unwrap();
        let outcome = Storage::new(&path).load().unwrap();
        assert!(matches!(outcome, LoadOutcome::Loaded(ref list) if list.is_empty()));
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{not json").unwrap();
        let outcome = Storage::new(&path).load().unwrap();
        assert!(outcome.is_corrupt());
        assert!(outcome.into_list().is_empty());
    }

    #[test]
    fn test_save_uses_four_space_indent_and_keeps_unicode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let storage = Storage::new(&path);

        let mut list = TodoList::new();
        list.add("牛乳を買う", "2024-06-10", "A").unwrap();
        storage.save(&list).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n    {\n        \"id\": 1,"));
        assert!(content.contains("牛乳を買う"));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("tasks.json"));

        let mut list = TodoList::new();
        let id = list.add("One", "2024-06-10", "A").unwrap();
        list.add("Two", "2024-06-11", "C").unwrap();
        list.toggle_complete(&[id]);
        storage.save(&list).unwrap();

        let loaded = storage.load().unwrap().into_list();
        assert_eq!(loaded, list);
    }
}
