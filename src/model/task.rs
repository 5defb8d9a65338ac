use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable task identity: the creation time in milliseconds since the epoch.
///
/// Ids are assigned by the task list and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Task title text, unique among current tasks at insertion time
    pub title: String,
    /// Completion flag
    pub done: bool,
}

impl Task {
    /// Create a new, not-yet-done task
    pub fn new(id: TaskId, title: String) -> Self {
        Task {
            id,
            title,
            done: false,
        }
    }

    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.done { 'x' } else { ' ' }
    }
}
