// In-memory task store with snapshot semantics

use crate::filter::{self, Filter};
use crate::ident::{IdSource, UuidSource};
use crate::task::Task;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors surfaced by store operations
///
/// A missing ID is deliberately not an error: toggle/edit/delete on an
/// unknown ID leave the collection untouched and report the miss through
/// their return value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Task names must contain at least one non-whitespace character
    #[error("task name cannot be empty or whitespace-only")]
    EmptyName,

    /// Seed collections must not reuse an ID
    #[error("duplicate task id in seed: {0}")]
    DuplicateId(String),

    /// Seed collections must not contain blank IDs
    #[error("task id cannot be empty or whitespace-only")]
    BlankId,
}

/// Owner of the current task collection and the active display filter
///
/// Every mutating operation computes the next collection from the current
/// one and installs it as a fresh snapshot; snapshots handed out earlier
/// are never touched again. Operations run to completion one at a time,
/// in the order intents arrive.
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: Filter,
    ids: Box<dyn IdSource>,
}

impl TaskStore {
    /// Empty store with UUID-backed task IDs
    pub fn new() -> Self {
        Self::with_ids(Box::new(UuidSource))
    }

    /// Empty store drawing task IDs from the given source
    pub fn with_ids(ids: Box<dyn IdSource>) -> Self {
        Self {
            tasks: Vec::new(),
            filter: Filter::default(),
            ids,
        }
    }

    /// Store seeded from an externally supplied collection
    ///
    /// The seed is validated against the ID invariant: every ID must be
    /// non-blank and unique within the collection. Order is kept as given.
    pub fn seeded(tasks: Vec<Task>) -> Result<Self, StoreError> {
        Self::seeded_with_ids(tasks, Box::new(UuidSource))
    }

    /// Seeded store drawing future task IDs from the given source
    pub fn seeded_with_ids(tasks: Vec<Task>, ids: Box<dyn IdSource>) -> Result<Self, StoreError> {
        for (i, task) in tasks.iter().enumerate() {
            if task.id.trim().is_empty() {
                return Err(StoreError::BlankId);
            }
            if tasks[..i].iter().any(|other| other.id == task.id) {
                return Err(StoreError::DuplicateId(task.id.clone()));
            }
        }

        debug!(count = tasks.len(), "seeded task store");
        Ok(Self {
            tasks,
            filter: Filter::default(),
            ids,
        })
    }

    /// Append a new task with the given name
    ///
    /// The task gets a freshly generated ID and starts uncompleted; all
    /// prior tasks keep their position. Returns the new ID. Blank names
    /// are rejected; accepted names are stored verbatim, untrimmed.
    pub fn add_task(&mut self, name: &str) -> Result<String, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }

        let id = self.ids.next_id();
        let mut next = self.tasks.clone();
        next.push(Task::new(id.clone(), name));
        self.tasks = next;

        debug!(id = %id, "added task");
        Ok(id)
    }

    /// Invert the completion state of the task with the given ID
    ///
    /// Returns whether a task matched. No match is a no-op, not an error.
    pub fn toggle_task_completed(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            warn!(id = %id, "toggle on unknown task id, ignoring");
            return false;
        }

        self.tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    Task {
                        completed: !task.completed,
                        ..task.clone()
                    }
                } else {
                    task.clone()
                }
            })
            .collect();

        debug!(id = %id, "toggled task");
        true
    }

    /// Replace the name of the task with the given ID
    ///
    /// Last write wins; all other fields and tasks are unchanged. Returns
    /// `Ok(false)` when the ID is unknown. Blank names are rejected before
    /// the collection is touched.
    pub fn edit_task(&mut self, id: &str, new_name: &str) -> Result<bool, StoreError> {
        if new_name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        if !self.contains(id) {
            warn!(id = %id, "edit on unknown task id, ignoring");
            return Ok(false);
        }

        self.tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    Task {
                        name: new_name.to_string(),
                        ..task.clone()
                    }
                } else {
                    task.clone()
                }
            })
            .collect();

        debug!(id = %id, "edited task");
        Ok(true)
    }

    /// Remove the task with the given ID
    ///
    /// Remaining tasks keep their relative order. Returns whether a task
    /// matched; no match is a no-op.
    pub fn delete_task(&mut self, id: &str) -> bool {
        let next: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect();

        if next.len() == self.tasks.len() {
            warn!(id = %id, "delete on unknown task id, ignoring");
            return false;
        }

        self.tasks = next;
        debug!(id = %id, "deleted task");
        true
    }

    /// Replace the active display filter
    pub fn set_filter(&mut self, filter: Filter) {
        debug!(filter = %filter, "set filter");
        self.filter = filter;
    }

    /// The active display filter
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The current snapshot, borrowed
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// An owned copy of the current snapshot
    ///
    /// Later operations never affect a snapshot taken here.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Tasks passing the active filter, in collection order
    ///
    /// Recomputed on every call, never cached.
    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> {
        filter::visible(&self.tasks, self.filter)
    }

    /// Number of tasks passing the active filter
    pub fn visible_count(&self) -> usize {
        self.visible_tasks().count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn contains(&self, id: &str) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
