use serde::{Deserialize, Serialize};

use crate::models::{ProjectId, TaskId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub assigned_tasks: Vec<TaskId>,
    pub projects: Vec<ProjectId>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            assigned_tasks: Vec::new(),
            projects: Vec::new(),
        }
    }

    pub fn holds(&self, task: TaskId) -> bool {
        self.assigned_tasks.contains(&task)
    }

    /// Drops the first occurrence of `task`. Returns whether anything was removed.
    pub fn unassign(&mut self, task: TaskId) -> bool {
        match self.assigned_tasks.iter().position(|t| *t == task) {
            Some(idx) => {
                self.assigned_tasks.remove(idx);
                true
            }
            None => false,
        }
    }
}
