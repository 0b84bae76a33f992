// In-memory task list: active tasks plus an append-only removed list

use crate::filter::Filter;
use crate::id::{IdGenerator, SequentialIds};
use crate::models::{Snapshot, Task, TaskState};
use tracing::debug;

/// Owns the active and removed collections
///
/// Mutations that do not apply (empty text, unknown id) are silent no-ops.
/// The returned `bool`/`Option` only reports whether anything changed.
pub struct TaskList {
    active: Vec<Task>,
    removed: Vec<Task>,
    ids: Box<dyn IdGenerator>,
}

impl TaskList {
    /// Create an empty list using sequential ids
    pub fn new() -> Self {
        Self::with_ids(Box::new(SequentialIds::new()))
    }

    /// Create an empty list drawing ids from `ids`
    pub fn with_ids(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            active: Vec::new(),
            removed: Vec::new(),
            ids,
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a new incomplete task with the trimmed `text`
    ///
    /// Returns the new id, or `None` when the trimmed text is empty.
    pub fn add(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring add with empty text");
            return None;
        }

        let id = self.ids.next_id();
        debug!(id = %id, text, "Adding task");
        self.active.push(Task::new(id.clone(), text.to_string()));
        Some(id)
    }

    /// Flip the completed flag of an active task
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.active.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!(id, completed = task.completed, "Toggled task");
                true
            }
            None => {
                debug!(id, "Ignoring toggle of unknown task");
                false
            }
        }
    }

    /// Move an active task to the end of the removed list
    pub fn remove(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(pos) => {
                let task = self.active.remove(pos);
                debug!(id, completed = task.completed, "Removed task");
                self.removed.push(task);
                true
            }
            None => {
                debug!(id, "Ignoring remove of unknown task");
                false
            }
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Active tasks in insertion order
    pub fn active(&self) -> &[Task] {
        &self.active
    }

    /// Active tasks matching `filter`, recomputed on every call
    pub fn view(&self, filter: Filter) -> Vec<&Task> {
        self.active.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn completed_view(&self) -> Vec<&Task> {
        self.view(Filter::Completed)
    }

    /// Removed tasks in removal order
    pub fn removed_view(&self) -> &[Task] {
        &self.removed
    }

    /// Look up an active task
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.active.iter().find(|t| t.id == id)
    }

    /// Lifecycle state of `id`, or `None` if no task ever had it
    pub fn state(&self, id: &str) -> Option<TaskState> {
        if let Some(task) = self.get(id) {
            return Some(if task.completed {
                TaskState::ActiveComplete
            } else {
                TaskState::ActiveIncomplete
            });
        }
        self.removed
            .iter()
            .any(|t| t.id == id)
            .then_some(TaskState::Removed)
    }

    /// Number of active tasks
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            active: self.active.clone(),
            removed: self.removed.clone(),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.active.iter().position(|t| t.id == id)
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TaskList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskList")
            .field("active", &self.active)
            .field("removed", &self.removed)
            .finish_non_exhaustive()
    }
}
