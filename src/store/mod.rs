//! Arena owning every task and user.
//!
//! Projects and users refer to tasks by [`TaskId`], so a task reachable from
//! several collections is a single node and a mutation through one path is seen
//! through all of them. Nodes are never dropped.

pub mod progress;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::TrackerError;
use crate::models::{Task, TaskId, User, UserId};

#[derive(Debug, Default)]
pub struct Store {
    tasks: Vec<Task>,
    task_index: HashMap<TaskId, usize>,
    users: Vec<User>,
    user_index: HashMap<UserId, usize>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, name: impl Into<String>) -> UserId {
        let user = User::new(name);
        let id = user.id;
        debug!(user = %id, name = %user.name, "user created");
        self.user_index.insert(id, self.users.len());
        self.users.push(user);
        id
    }

    pub fn user(&self, id: UserId) -> Result<&User, TrackerError> {
        self.user_index
            .get(&id)
            .map(|&idx| &self.users[idx])
            .ok_or_else(|| TrackerError::unknown_user(&id.to_string()))
    }

    pub fn user_mut(&mut self, id: UserId) -> Result<&mut User, TrackerError> {
        match self.user_index.get(&id) {
            Some(&idx) => Ok(&mut self.users[idx]),
            None => Err(TrackerError::unknown_user(&id.to_string())),
        }
    }

    /// Users in creation order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn add_simple_task(
        &mut self,
        owner: UserId,
        description: impl Into<String>,
        deadline: DateTime<Utc>,
    ) -> Result<TaskId, TrackerError> {
        self.user(owner)?;
        Ok(self.insert_task(Task::simple(owner, description, deadline)))
    }

    /// Subtasks must already be in the store, which keeps containment acyclic.
    pub fn add_composite_task(
        &mut self,
        subtasks: Vec<TaskId>,
        owners: Vec<UserId>,
        description: impl Into<String>,
        deadline: DateTime<Utc>,
    ) -> Result<TaskId, TrackerError> {
        for sub in &subtasks {
            self.task(*sub)?;
        }
        for owner in &owners {
            self.user(*owner)?;
        }
        Ok(self.insert_task(Task::composite(subtasks, owners, description, deadline)))
    }

    fn insert_task(&mut self, task: Task) -> TaskId {
        let id = task.id();
        debug!(
            task = %id,
            description = task.description(),
            composite = task.is_composite(),
            "task created"
        );
        self.task_index.insert(id, self.tasks.len());
        self.tasks.push(task);
        id
    }

    pub fn task(&self, id: TaskId) -> Result<&Task, TrackerError> {
        self.task_index
            .get(&id)
            .map(|&idx| &self.tasks[idx])
            .ok_or_else(|| TrackerError::unknown_task(&id.to_string()))
    }

    /// The only mutation a stored task accepts; identity and containment are fixed at creation.
    pub fn complete_task(&mut self, id: TaskId, at: DateTime<Utc>) -> Result<(), TrackerError> {
        match self.task_index.get(&id) {
            Some(&idx) => self.tasks[idx].complete(at),
            None => Err(TrackerError::unknown_task(&id.to_string())),
        }
    }

    pub fn description(&self, id: TaskId) -> Result<&str, TrackerError> {
        Ok(self.task(id)?.description())
    }
}
