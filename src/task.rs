//! The task entity and its derived predicates.
//!
//! Tasks are created only through [`crate::TaskManager`]; this module owns
//! the value types (status, priority, the task itself) and everything a task
//! can answer about its own state.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::manager::{NewTask, TrackerError};

// ── Status & priority ─────────────────────────────────────────

/// Task status lifecycle: Pending → Completed.
///
/// One-way. Completing an already-completed task leaves it completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum TaskStatus {
    Pending = 0,
    Completed = 1,
}

/// Priority rank used for ordering, not scheduling. Low sorts below High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Priority {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        })
    }
}

/// Parse a priority name. Accepts `low` / `medium` / `high` in any ASCII
/// case; everything else is rejected rather than silently defaulted.
impl FromStr for Priority {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(TrackerError::UnknownPriority(s.to_string())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        })
    }
}

// ── Task ──────────────────────────────────────────────────────

/// A task, one to-do item.
///
/// Overdue is never stored. It is derived from `due_date`, `status` and the
/// evaluation instant (see [`Task::is_overdue`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Construction happens through [`crate::TaskManager::add_task`], which
    /// validates the title and supplies `now` from its clock.
    pub(crate) fn new(title: String, options: NewTask, now: DateTime<Utc>) -> Self {
        Task {
            id: Uuid::new_v4(),
            title,
            status: TaskStatus::Pending,
            priority: options.priority.unwrap_or_default(),
            tags: Vec::new(),
            due_date: options.due_date,
            created_at: now,
        }
    }

    /// Pending → Completed. No-op when already completed.
    pub fn complete(&mut self) {
        self.status = TaskStatus::Completed;
    }

    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Whether the task was due strictly before `now` and is still open.
    /// Time-dependent, so callers pass the instant; nothing is cached.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_date {
            Some(due) => !self.is_completed() && due < now,
            None => false,
        }
    }

    /// Attach a tag. Set semantics: an already-present tag is not
    /// duplicated, and first-insertion order is kept for display.
    /// Returns whether the tag was newly added.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.has_tag(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Exact, case-sensitive membership test.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 11, 12, 0, 0).unwrap()
    }

    fn task() -> Task {
        Task::new("Write the report".into(), NewTask::default(), base())
    }

    #[test]
    fn new_task_starts_pending_with_defaults() {
        let t = task();
        assert_eq!(t.status, TaskStatus::Pending);
        assert_eq!(t.priority, Priority::Medium);
        assert_eq!(t.due_date, None);
        assert!(t.tags.is_empty());
        assert_eq!(t.created_at, base());
        assert!(t.is_pending());
        assert!(!t.is_completed());
    }

    #[test]
    fn complete_is_one_way_and_idempotent() {
        let mut t = task();
        t.complete();
        assert!(t.is_completed());
        t.complete();
        t.complete();
        assert!(t.is_completed());
        assert!(!t.is_pending());
    }

    #[test]
    fn overdue_false_without_due_date() {
        let t = task();
        // Far in the future relative to creation, still not overdue.
        assert!(!t.is_overdue(base() + Duration::days(365)));
    }

    #[test]
    fn overdue_false_once_completed() {
        let mut t = Task::new(
            "Pay the invoice".into(),
            NewTask {
                due_date: Some(base() - Duration::days(1)),
                priority: None,
            },
            base(),
        );
        assert!(t.is_overdue(base()));
        t.complete();
        assert!(!t.is_overdue(base()));
    }

    #[test]
    fn overdue_comparison_is_strict() {
        let due = base() + Duration::hours(1);
        let t = Task::new(
            "Call the bank".into(),
            NewTask {
                due_date: Some(due),
                priority: None,
            },
            base(),
        );
        assert!(!t.is_overdue(due)); // due == now is not yet overdue
        assert!(t.is_overdue(due + Duration::seconds(1)));
        assert!(!t.is_overdue(due - Duration::seconds(1)));
    }

    #[test]
    fn add_tag_dedupes_and_keeps_insertion_order() {
        let mut t = task();
        assert!(t.add_tag("work"));
        assert!(t.add_tag("urgent"));
        assert!(!t.add_tag("work"));
        assert_eq!(t.tags, vec!["work", "urgent"]);
        assert!(t.has_tag("work"));
        assert!(!t.has_tag("Work")); // case-sensitive
    }

    #[test]
    fn priority_parses_known_names_any_case() {
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("Medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
    }

    #[test]
    fn priority_rejects_unknown_names() {
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(err, TrackerError::UnknownPriority("urgent".into()));
    }

    #[test]
    fn priority_orders_by_rank() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }
}
