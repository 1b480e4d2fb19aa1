use crate::todo::ViewMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings read from an optional TOML file
///
/// Any key may be omitted; command-line flags take precedence over the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the JSON task file
    pub data_file: PathBuf,
    /// View used by `list` when `--view` is not given
    pub default_view: ViewMode,
    /// Purge completed tasks from before this week on startup
    pub cleanup_on_start: bool,
    /// Log filter used when RUST_LOG is not set (e.g. "warn", "weekly_todo=debug")
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("tasks.json"),
            default_view: ViewMode::ThisWeek,
            cleanup_on_start: true,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load settings from `path`, or defaults when no path is given or the file is absent
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(p) = path else {
            return Ok(Self::default());
        };
        if !p.exists() {
            return Ok(Self::default());
        }
        let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
        toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let s = toml::to_string_pretty(self).context("serialize config")?;
        fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}
