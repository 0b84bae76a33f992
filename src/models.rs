// Data models for TaskManager

use serde::{Deserialize, Serialize};

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub(crate) fn new(id: String, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Where a task sits in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    ActiveIncomplete,
    ActiveComplete,
    Removed,
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskState::ActiveIncomplete => write!(f, "active_incomplete"),
            TaskState::ActiveComplete => write!(f, "active_complete"),
            TaskState::Removed => write!(f, "removed"),
        }
    }
}

/// Owned copy of both collections, used for the JSON read model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub active: Vec<Task>,
    pub removed: Vec<Task>,
}
