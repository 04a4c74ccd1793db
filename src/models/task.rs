use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::{TaskId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Label used in the progress report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskKind {
    Simple {
        owner: UserId,
    },
    Composite {
        subtasks: Vec<TaskId>,
        owners: Vec<UserId>,
    },
}

/// A node of a task tree.
///
/// Composite nodes refer to their subtasks by id; the nodes themselves live in
/// [`crate::store::Store`].
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    id: TaskId,
    description: String,
    deadline: DateTime<Utc>,
    status: TaskStatus,
    completed_at: Option<DateTime<Utc>>,
    kind: TaskKind,
}

impl Task {
    pub fn simple(owner: UserId, description: impl Into<String>, deadline: DateTime<Utc>) -> Self {
        Self::with_kind(TaskKind::Simple { owner }, description.into(), deadline)
    }

    /// Owners are treated as a set: repeated users are dropped, first-seen order is kept.
    pub fn composite(
        subtasks: Vec<TaskId>,
        owners: Vec<UserId>,
        description: impl Into<String>,
        deadline: DateTime<Utc>,
    ) -> Self {
        let mut unique_owners = Vec::with_capacity(owners.len());
        for owner in owners {
            if !unique_owners.contains(&owner) {
                unique_owners.push(owner);
            }
        }
        Self::with_kind(
            TaskKind::Composite {
                subtasks,
                owners: unique_owners,
            },
            description.into(),
            deadline,
        )
    }

    fn with_kind(kind: TaskKind, description: String, deadline: DateTime<Utc>) -> Self {
        Self {
            id: TaskId::new(),
            description,
            deadline,
            status: TaskStatus::InProgress,
            completed_at: None,
            kind,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.kind, TaskKind::Composite { .. })
    }

    /// Direct children, empty for simple tasks.
    pub fn subtasks(&self) -> &[TaskId] {
        match &self.kind {
            TaskKind::Simple { .. } => &[],
            TaskKind::Composite { subtasks, .. } => subtasks,
        }
    }

    pub fn owners(&self) -> Vec<UserId> {
        match &self.kind {
            TaskKind::Simple { owner } => vec![*owner],
            TaskKind::Composite { owners, .. } => owners.clone(),
        }
    }

    /// Marks the task completed. Subtasks of a composite are left untouched.
    pub fn complete(&mut self, at: DateTime<Utc>) -> Result<(), TrackerError> {
        if self.status.is_terminal() {
            return Err(TrackerError::already_completed(&self.description));
        }
        self.status = TaskStatus::Completed;
        self.completed_at = Some(at);
        Ok(())
    }

    /// True when this node alone was completed strictly after its deadline.
    pub fn is_late(&self) -> bool {
        self.completed_at.is_some_and(|at| at > self.deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_new_task_is_in_progress() {
        let t = Task::simple(UserId::new(), "Review code", day(15));
        assert_eq!(t.status(), TaskStatus::InProgress);
        assert!(t.completed_at().is_none());
        assert!(!t.is_composite());
        assert!(t.subtasks().is_empty());
    }

    #[test]
    fn test_complete_sets_date_once() {
        let mut t = Task::simple(UserId::new(), "Review code", day(15));
        t.complete(day(14)).unwrap();
        assert_eq!(t.status(), TaskStatus::Completed);
        assert_eq!(t.completed_at(), Some(day(14)));

        let err = t.complete(day(20)).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::InvalidStatusTransition);
        assert_eq!(t.completed_at(), Some(day(14)));
    }

    #[test]
    fn test_is_late_is_strict() {
        let mut on_time = Task::simple(UserId::new(), "a", day(15));
        on_time.complete(day(15)).unwrap();
        assert!(!on_time.is_late());

        let mut late = Task::simple(UserId::new(), "b", day(10));
        late.complete(day(12)).unwrap();
        assert!(late.is_late());

        let open = Task::simple(UserId::new(), "c", day(1));
        assert!(!open.is_late());
    }

    #[test]
    fn test_composite_owners_deduplicated() {
        let alice = UserId::new();
        let bob = UserId::new();
        let c = Task::composite(vec![], vec![alice, bob, alice], "c", day(25));
        assert!(c.is_composite());
        assert_eq!(c.owners(), vec![alice, bob]);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(TaskStatus::InProgress.as_str(), "in_progress");
        assert_eq!(TaskStatus::InProgress.label(), "In progress");
    }
}
