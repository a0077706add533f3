//! The owning task collection and its query surface.
//!
//! [`TaskManager`] is the runtime truth. Lives in memory, insertion-ordered.
//! The only mutations are appends (`add_task`) and edits of an owned task
//! (`complete_task`, `tag_task`, `find_task_mut`). Every query hands back
//! an independent snapshot, so callers can never reach the backing storage
//! through a returned list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::task::{Priority, Task};

// ── Errors ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// `add_task` given a blank title. The collection is left unchanged.
    #[error("task title must not be empty")]
    EmptyTitle,
    /// A priority name outside low / medium / high.
    #[error("unknown priority {0:?}, expected low, medium or high")]
    UnknownPriority(String),
    #[error("task not found")]
    TaskNotFound,
}

// ── Creation options ──────────────────────────────────────────

/// Options for [`TaskManager::add_task`]. Both fields are optional:
/// no due date by default, priority falls back to Medium.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTask {
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

// ── Statistics ────────────────────────────────────────────────

/// Aggregate snapshot over the collection. Recomputed from the live tasks
/// on every call; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    /// As of the instant the statistics were taken.
    pub overdue: usize,
    pub by_priority: PriorityCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

// ── TaskManager ───────────────────────────────────────────────

/// The authoritative task collection.
///
/// Tasks exist only inside a manager; ids are unique for its lifetime and
/// nothing in scope removes or reorders stored tasks.
pub struct TaskManager {
    tasks: Vec<Task>,
    clock: Box<dyn Clock>,
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskManager {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Inject a time source. `created_at` stamps, overdue checks and
    /// statistics all read from it.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        TaskManager {
            tasks: Vec::new(),
            clock: Box::new(clock),
        }
    }

    // ── Mutation ──────────────────────────────────────────────

    /// Create a task and append it to the collection.
    ///
    /// The only validation is the title: blank titles are rejected and the
    /// collection stays untouched. Returns a copy of the stored task.
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        options: NewTask,
    ) -> Result<Task, TrackerError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TrackerError::EmptyTitle);
        }

        let task = Task::new(title, options, self.clock.now());
        debug!(id = %task.id, title = %task.title, "task created");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Mark a task completed. Completing an already-completed task is a
    /// no-op that still succeeds.
    pub fn complete_task(&mut self, id: Uuid) -> Result<&Task, TrackerError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TrackerError::TaskNotFound)?;
        task.complete();
        debug!(id = %task.id, "task completed");
        Ok(task)
    }

    /// Attach a tag to a task. Returns whether the tag was newly added
    /// (false when it was already present).
    pub fn tag_task(&mut self, id: Uuid, tag: impl Into<String>) -> Result<bool, TrackerError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TrackerError::TaskNotFound)?;
        let tag = tag.into();
        let added = task.add_tag(tag.as_str());
        if added {
            debug!(id = %id, %tag, "task tagged");
        }
        Ok(added)
    }

    // ── Lookup ────────────────────────────────────────────────

    /// Look up a task by id (linear scan, fine at this scale).
    pub fn find_task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Mutable lookup, for callers that complete or tag the task directly.
    pub fn find_task_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // ── Queries ───────────────────────────────────────────────

    /// Snapshot of the whole collection in insertion order.
    pub fn all_tasks(&self) -> Vec<Task> {
        self.tasks.to_vec()
    }

    pub fn pending_tasks(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_pending())
            .cloned()
            .collect()
    }

    pub fn completed_tasks(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_completed())
            .cloned()
            .collect()
    }

    /// Tasks carrying `tag` (exact, case-sensitive), insertion order.
    pub fn filter_by_tag(&self, tag: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.has_tag(tag))
            .cloned()
            .collect()
    }

    /// All tasks ordered by priority rank; High first unless `ascending`.
    /// The sort is stable, so equal priorities keep insertion order.
    pub fn sort_by_priority(&self, ascending: bool) -> Vec<Task> {
        let mut sorted = self.tasks.to_vec();
        if ascending {
            sorted.sort_by(|a, b| a.priority.cmp(&b.priority));
        } else {
            sorted.sort_by(|a, b| b.priority.cmp(&a.priority));
        }
        sorted
    }

    /// Tasks overdue as of now, insertion order. One clock sample covers
    /// the whole scan.
    pub fn overdue_tasks(&self) -> Vec<Task> {
        let now = self.clock.now();
        self.tasks
            .iter()
            .filter(|t| t.is_overdue(now))
            .cloned()
            .collect()
    }

    /// Aggregate counts over the live collection.
    pub fn statistics(&self) -> Statistics {
        let now = self.clock.now();
        let mut stats = Statistics {
            total: self.tasks.len(),
            pending: 0,
            completed: 0,
            overdue: 0,
            by_priority: PriorityCounts::default(),
        };
        for task in &self.tasks {
            if task.is_completed() {
                stats.completed += 1;
            } else {
                stats.pending += 1;
            }
            if task.is_overdue(now) {
                stats.overdue += 1;
            }
            match task.priority {
                Priority::Low => stats.by_priority.low += 1,
                Priority::Medium => stats.by_priority.medium += 1,
                Priority::High => stats.by_priority.high += 1,
            }
        }
        stats
    }
}

// ── Tests ──────────────────────────────────────────────────────
