//! Project aggregate: top-level task list, eligible users, and the operations
//! that walk the task tree to assign, complete, remove and report.

pub mod report;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::TrackerError;
use crate::graph::walk;
use crate::models::{ProjectId, TaskId, UserId};
use crate::store::Store;

pub use report::{ProgressReport, ReportLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignOutcome {
    Assigned,
    /// The node is not in the project's top-level list and was skipped.
    NotInProject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeAssignment {
    pub task: TaskId,
    pub outcome: AssignOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub task: TaskId,
    pub completed_at: DateTime<Utc>,
    pub deadline_violated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Removal {
    pub task: TaskId,
    pub unassigned_from: Option<UserId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub objectives: String,
    pub deadline: DateTime<Utc>,
    eligible_users: Vec<UserId>,
    tasks: Vec<TaskId>,
}

impl Project {
    pub fn new(objectives: impl Into<String>, deadline: DateTime<Utc>, eligible_users: Vec<UserId>) -> Self {
        Self {
            id: ProjectId::new(),
            objectives: objectives.into(),
            deadline,
            eligible_users,
            tasks: Vec::new(),
        }
    }

    pub fn eligible_users(&self) -> &[UserId] {
        &self.eligible_users
    }

    /// Top-level tasks in insertion order. May contain the same task twice.
    pub fn tasks(&self) -> &[TaskId] {
        &self.tasks
    }

    pub fn is_eligible(&self, user: UserId) -> bool {
        self.eligible_users.contains(&user)
    }

    /// Top-level membership only; subtasks of a listed composite do not count.
    pub fn contains_task(&self, task: TaskId) -> bool {
        self.tasks.contains(&task)
    }

    pub fn add_task(&mut self, store: &Store, task: TaskId) -> Result<(), TrackerError> {
        let description = store.description(task)?;
        info!(project = %self.id, task = %task, description, "task added");
        self.tasks.push(task);
        Ok(())
    }

    /// Assigns `task` to `user`, walking subtasks before their parent.
    ///
    /// Each visited node is appended to the user's list only when it is itself
    /// a top-level task of this project; other nodes are reported as
    /// [`AssignOutcome::NotInProject`] and the walk continues.
    pub fn assign_task(
        &self,
        store: &mut Store,
        task: TaskId,
        user: UserId,
    ) -> Result<Vec<NodeAssignment>, TrackerError> {
        if !self.is_eligible(user) {
            let name = store.user(user).map(|u| u.name.clone()).unwrap_or_else(|_| user.to_string());
            warn!(project = %self.id, user = %name, "assignment rejected: user not eligible");
            return Err(TrackerError::not_eligible_user(&name));
        }
        store.user(user)?;

        let mut visited = Vec::new();
        walk::walk_children_first(store, task, &mut |node| {
            visited.push(node.id());
            Ok(())
        })?;

        let mut outcomes = Vec::with_capacity(visited.len());
        for node in visited {
            let outcome = if self.contains_task(node) {
                store.user_mut(user)?.assigned_tasks.push(node);
                info!(task = %node, user = %user, "task assigned");
                AssignOutcome::Assigned
            } else {
                debug!(task = %node, "task not in project, skipped");
                AssignOutcome::NotInProject
            };
            outcomes.push(NodeAssignment { task: node, outcome });
        }
        Ok(outcomes)
    }

    pub fn complete_task(
        &self,
        store: &mut Store,
        task: TaskId,
        completed_at: DateTime<Utc>,
    ) -> Result<Completion, TrackerError> {
        if !self.contains_task(task) {
            let description = store.description(task).map(str::to_string).unwrap_or_else(|_| task.to_string());
            return Err(TrackerError::task_not_found(&description));
        }
        store.complete_task(task, completed_at)?;
        info!(task = %task, %completed_at, "task completed");

        let deadline_violated = store.check_deadline_violation(task)?;
        if deadline_violated {
            let description = store.description(task)?;
            warn!(task = %task, description, "task completed after its deadline");
        }
        Ok(Completion {
            task,
            completed_at,
            deadline_violated,
        })
    }

    /// Detaches `task` from the project and from the first eligible user
    /// holding it. Other users keep their assignment.
    pub fn remove_task(&mut self, store: &mut Store, task: TaskId) -> Result<Removal, TrackerError> {
        let Some(idx) = self.tasks.iter().position(|t| *t == task) else {
            let description = store.description(task).map(str::to_string).unwrap_or_else(|_| task.to_string());
            return Err(TrackerError::task_not_found(&description));
        };
        let mut unassigned_from = None;
        for user in &self.eligible_users {
            if unassigned_from.is_none() && store.user(*user)?.holds(task) {
                unassigned_from = Some(*user);
            }
        }

        self.tasks.remove(idx);
        info!(project = %self.id, task = %task, "task removed");
        if let Some(user) = unassigned_from {
            let holder = store.user_mut(user)?;
            holder.unassign(task);
            info!(task = %task, user = %holder.name, "assignment removed");
        }
        Ok(Removal { task, unassigned_from })
    }

    pub fn generate_progress_report(&self, store: &Store) -> Result<ProgressReport, TrackerError> {
        let mut lines = Vec::new();
        for root in &self.tasks {
            walk::walk_pre_order(store, *root, 0, &mut |node, depth| {
                lines.push(ReportLine {
                    task: node.id(),
                    depth,
                    description: node.description().to_string(),
                    status: node.status(),
                    progress: store.track_progress(node.id())?,
                });
                Ok(())
            })?;
        }
        Ok(ProgressReport {
            objectives: self.objectives.clone(),
            lines,
        })
    }
}
