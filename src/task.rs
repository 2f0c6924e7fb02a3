// Task model

use serde::{Deserialize, Serialize};

/// A single to-do item
///
/// The `id` is assigned at creation and never changes afterwards; `name`
/// and `completed` are replaced by edit/toggle operations on the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

impl Task {
    /// Build a fresh, not-yet-completed task
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed: false,
        }
    }
}
