use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Date format used for task dates, both on input and in the JSON file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sort key for tasks without a date, so they sort after every real date
pub const MISSING_DATE_SORT_KEY: &str = "9999-12-31";

/// Label displayed for a missing date or rank
pub const NOT_AVAILABLE: &str = "N/A";

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Stable identifier of a task, assigned from the list's counter on creation
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = String;

    /// Accepts both `3` and `#3`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        match digits.parse::<u32>() {
            Ok(n) if n > 0 => Ok(TaskId(n)),
            _ => Err(format!(
                "Invalid task ID '{}'. Use the number shown in the list (e.g., '3' or '#3')",
                s
            )),
        }
    }
}

/// Priority tag of a task
///
/// Cosmetic only: it drives how the task is marked when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    A,
    B,
    C,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Rank::A),
            "B" => Ok(Rank::B),
            "C" => Ok(Rank::C),
            _ => Err(format!("Invalid rank '{}'. Valid ranks: A, B, C", s)),
        }
    }
}

/// A single to-do item
///
/// `date` is kept as the raw string from the file. Dates entered through
/// `add`/`edit` are always valid `YYYY-MM-DD`, but files written by older
/// versions may hold anything, and such values are preserved untouched.
/// Keys this version does not know about are kept in `extra` and written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>, date: NaiveDate, rank: Rank) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            date: Some(date.format(DATE_FORMAT).to_string()),
            rank: Some(rank),
            extra: Map::new(),
        }
    }

    /// The task date, if present and well-formed
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).ok())
    }

    /// Flip the completed flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Key used for date ordering; missing dates sort last
    pub fn date_sort_key(&self) -> &str {
        self.date.as_deref().unwrap_or(MISSING_DATE_SORT_KEY)
    }

    pub fn status_marker(&self) -> &'static str {
        if self.completed { "✔" } else { " " }
    }

    pub fn date_label(&self) -> &str {
        self.date.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn rank_label(&self) -> &'static str {
        self.rank.map(|r| r.as_str()).unwrap_or(NOT_AVAILABLE)
    }
}
