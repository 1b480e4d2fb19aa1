use crate::error::TodoError;
use crate::todo::task::{DATE_FORMAT, Task, TaskId};
use crate::todo::week::Week;
use crate::validation;
use chrono::NaiveDate;

/// A task moved forward by [`TodoList::carry_over`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarriedTask {
    pub id: TaskId,
    pub text: String,
    /// Date the task had before it was carried over
    pub from_date: String,
}

/// The in-memory task list
///
/// All operations here are pure list manipulation; persistence is the job of
/// [`crate::TaskStore`]. A method that returns an error leaves the list
/// exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    /// Tasks in insertion order, which is also the order they are written to disk
    pub(crate) tasks: Vec<Task>,

    /// Last ID handed out; the next task gets `task_counter + 1`
    pub task_counter: u32,
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl TodoList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique task ID
    ///
    /// IDs are never reused, so once `u32::MAX` has been handed out no more
    /// tasks can be added.
    pub fn generate_task_id(&mut self) -> Result<TaskId, TodoError> {
        self.task_counter = self
            .task_counter
            .checked_add(1)
            .ok_or(TodoError::IdsExhausted)?;
        Ok(TaskId(self.task_counter))
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Find a task by its ID
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Validate the fields and append a new incomplete task
    ///
    /// # Arguments
    /// * `text` - Task description (must not be blank)
    /// * `date` - Date in YYYY-MM-DD format
    /// * `rank` - A, B or C
    ///
    /// # Returns
    /// The ID of the new task
    pub fn add(&mut self, text: &str, date: &str, rank: &str) -> Result<TaskId, TodoError> {
        let input = validation::validate_task_input(text, date, rank)?;
        let id = self.generate_task_id()?;
        self.tasks.push(Task::new(id, input.text, input.date, input.rank));
        Ok(id)
    }

    /// Validate the fields and overwrite text, date and rank of an existing task
    pub fn edit(&mut self, id: TaskId, text: &str, date: &str, rank: &str) -> Result<(), TodoError> {
        let input = validation::validate_task_input(text, date, rank)?;
        let task = self.get_mut(id).ok_or(TodoError::NotFound(id))?;
        task.text = input.text;
        task.date = Some(input.date.format(DATE_FORMAT).to_string());
        task.rank = Some(input.rank);
        Ok(())
    }

    /// Remove the tasks with the given IDs
    ///
    /// IDs that are not in the list are skipped, unless none of them match.
    ///
    /// # Returns
    /// The removed tasks, in list order
    pub fn delete(&mut self, ids: &[TaskId]) -> Result<Vec<Task>, TodoError> {
        let Some(&first) = ids.first() else {
            return Err(TodoError::EmptySelection("delete"));
        };

        let (removed, kept): (Vec<Task>, Vec<Task>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|t| ids.contains(&t.id));
        self.tasks = kept;

        if removed.is_empty() {
            return Err(TodoError::NotFound(first));
        }
        Ok(removed)
    }

    /// Flip `completed` on each listed task
    ///
    /// A task listed more than once is still flipped only once.
    ///
    /// # Returns
    /// IDs of the tasks that were flipped, in list order
    pub fn toggle_complete(&mut self, ids: &[TaskId]) -> Vec<TaskId> {
        let mut toggled = Vec::new();
        for task in self.tasks.iter_mut().filter(|t| ids.contains(&t.id)) {
            task.toggle();
            toggled.push(task.id);
        }
        toggled
    }

    /// Remove completed tasks dated before this week's Monday
    ///
    /// Incomplete tasks are kept whatever their date, and so is any task whose
    /// date is missing or cannot be parsed.
    ///
    /// # Returns
    /// The removed tasks
    pub fn cleanup_old_completed(&mut self, today: NaiveDate) -> Vec<Task> {
        let start_of_week = Week::containing(today).start();
        let (removed, kept): (Vec<Task>, Vec<Task>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|t| t.completed && t.parsed_date().is_some_and(|d| d < start_of_week));
        self.tasks = kept;
        removed
    }

    /// Move last week's unfinished tasks to this week's Monday
    ///
    /// # Returns
    /// One entry per moved task
    pub fn carry_over(&mut self, today: NaiveDate) -> Vec<CarriedTask> {
        let this_week = Week::containing(today);
        let last_week = this_week.previous();
        let new_date = this_week.start().format(DATE_FORMAT).to_string();

        let mut carried = Vec::new();
        for task in self.tasks.iter_mut().filter(|t| !t.completed) {
            if !task.parsed_date().is_some_and(|d| last_week.contains(d)) {
                continue;
            }
            let from_date = task.date.replace(new_date.clone()).unwrap_or_default();
            carried.push(CarriedTask {
                id: task.id,
                text: task.text.clone(),
                from_date,
            });
        }
        carried
    }
}
