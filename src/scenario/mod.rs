//! Scenario documents: users, tasks, one project and the operations to replay
//! against it. Keys in the document are local names; they are mapped to
//! generated ids when the scenario is built.

pub mod demo;
pub mod event;
pub mod runner;

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TrackerError;
use crate::graph::cycle;
use crate::models::{TaskId, UserId};
use crate::project::Project;
use crate::store::Store;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub users: Vec<UserInput>,
    pub tasks: Vec<TaskInput>,
    pub project: ProjectInput,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInput {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskInput {
    Simple {
        id: String,
        description: String,
        deadline: String,
        owner: String,
    },
    Composite {
        id: String,
        description: String,
        deadline: String,
        #[serde(default)]
        owners: Vec<String>,
        #[serde(default)]
        subtasks: Vec<String>,
    },
}

impl TaskInput {
    pub fn id(&self) -> &str {
        match self {
            Self::Simple { id, .. } | Self::Composite { id, .. } => id,
        }
    }

    fn description(&self) -> &str {
        match self {
            Self::Simple { description, .. } | Self::Composite { description, .. } => description,
        }
    }

    fn deadline(&self) -> &str {
        match self {
            Self::Simple { deadline, .. } | Self::Composite { deadline, .. } => deadline,
        }
    }

    fn subtasks(&self) -> &[String] {
        match self {
            Self::Simple { .. } => &[],
            Self::Composite { subtasks, .. } => subtasks,
        }
    }

    fn owner_refs(&self) -> Vec<&String> {
        match self {
            Self::Simple { owner, .. } => vec![owner],
            Self::Composite { owners, .. } => owners.iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInput {
    pub objectives: String,
    pub deadline: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    AddTask { task: String },
    Assign { task: String, user: String },
    Complete { task: String, date: String },
    Remove { task: String },
}

/// A built scenario: the store, the project and the key → id mappings.
#[derive(Debug)]
pub struct Workspace {
    pub store: Store,
    pub project: Project,
    pub users: HashMap<String, UserId>,
    pub tasks: HashMap<String, TaskId>,
}

impl Workspace {
    pub fn user_id(&self, key: &str) -> Result<UserId, TrackerError> {
        self.users
            .get(key)
            .copied()
            .ok_or_else(|| TrackerError::unknown_user(key))
    }

    pub fn task_id(&self, key: &str) -> Result<TaskId, TrackerError> {
        self.tasks
            .get(key)
            .copied()
            .ok_or_else(|| TrackerError::unknown_task(key))
    }
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, TrackerError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TrackerError::validation(format!("Invalid timestamp: '{s}'")))
}

impl Scenario {
    pub fn from_json(input: &str) -> Result<Self, TrackerError> {
        serde_json::from_str(input).map_err(|e| TrackerError::validation(format!("Invalid JSON: {e}")))
    }

    /// Checks the document without building anything.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.project.objectives.trim().is_empty() {
            return Err(TrackerError::validation("Project objectives are required"));
        }
        parse_timestamp(&self.project.deadline)?;

        let mut user_keys = HashSet::new();
        for u in &self.users {
            if u.id.is_empty() {
                return Err(TrackerError::validation("User id is required"));
            }
            if !user_keys.insert(u.id.as_str()) {
                return Err(TrackerError::validation(format!("Duplicate user id: {}", u.id)));
            }
        }

        let mut task_keys = HashSet::new();
        for t in &self.tasks {
            if t.id().is_empty() {
                return Err(TrackerError::validation("Task id is required"));
            }
            if t.description().is_empty() {
                return Err(TrackerError::validation(format!("Task '{}' has empty description", t.id())));
            }
            if !task_keys.insert(t.id()) {
                return Err(TrackerError::validation(format!("Duplicate task id: {}", t.id())));
            }
            parse_timestamp(t.deadline())?;
        }

        for t in &self.tasks {
            for owner in t.owner_refs() {
                if !user_keys.contains(owner.as_str()) {
                    return Err(TrackerError::validation(format!(
                        "Task '{}' references unknown user '{}'",
                        t.id(),
                        owner
                    )));
                }
            }
            for sub in t.subtasks() {
                if sub == t.id() {
                    return Err(TrackerError::validation(format!("Task '{}' contains itself", t.id())));
                }
                if !task_keys.contains(sub.as_str()) {
                    return Err(TrackerError::validation(format!(
                        "Task '{}' references unknown subtask '{}'",
                        t.id(),
                        sub
                    )));
                }
            }
        }

        for member in &self.project.members {
            if !user_keys.contains(member.as_str()) {
                return Err(TrackerError::validation(format!("Unknown project member '{member}'")));
            }
        }

        for (i, step) in self.steps.iter().enumerate() {
            let (task, user, date) = match step {
                Step::AddTask { task } | Step::Remove { task } => (task, None, None),
                Step::Assign { task, user } => (task, Some(user), None),
                Step::Complete { task, date } => (task, None, Some(date)),
            };
            if !task_keys.contains(task.as_str()) {
                return Err(TrackerError::validation(format!("Step {}: unknown task '{}'", i + 1, task)));
            }
            if let Some(user) = user {
                if !user_keys.contains(user.as_str()) {
                    return Err(TrackerError::validation(format!("Step {}: unknown user '{}'", i + 1, user)));
                }
            }
            if let Some(date) = date {
                parse_timestamp(date)?;
            }
        }

        let nodes: Vec<String> = self.tasks.iter().map(|t| t.id().to_string()).collect();
        let edges: Vec<(String, String)> = self
            .tasks
            .iter()
            .flat_map(|t| t.subtasks().iter().map(move |sub| (t.id().to_string(), sub.clone())))
            .collect();
        cycle::detect_cycle(&nodes, &edges)?;

        Ok(())
    }

    /// Validates, then creates users, tasks (subtasks first) and the project.
    /// Steps are not applied.
    pub fn build(&self) -> Result<Workspace, TrackerError> {
        self.validate()?;

        let mut store = Store::new();
        let mut users = HashMap::new();
        for u in &self.users {
            users.insert(u.id.clone(), store.add_user(u.name.clone()));
        }

        let inputs: HashMap<&str, &TaskInput> = self.tasks.iter().map(|t| (t.id(), t)).collect();
        let mut tasks = HashMap::new();
        for t in &self.tasks {
            create_task(t.id(), &inputs, &users, &mut store, &mut tasks)?;
        }

        let members = self
            .project
            .members
            .iter()
            .map(|m| users[m.as_str()])
            .collect::<Vec<_>>();
        let project = Project::new(
            self.project.objectives.clone(),
            parse_timestamp(&self.project.deadline)?,
            members,
        );
        for member in project.eligible_users() {
            store.user_mut(*member)?.projects.push(project.id);
        }

        debug!(
            users = users.len(),
            tasks = tasks.len(),
            steps = self.steps.len(),
            "scenario built"
        );
        Ok(Workspace {
            store,
            project,
            users,
            tasks,
        })
    }
}

fn create_task(
    key: &str,
    inputs: &HashMap<&str, &TaskInput>,
    users: &HashMap<String, UserId>,
    store: &mut Store,
    created: &mut HashMap<String, TaskId>,
) -> Result<TaskId, TrackerError> {
    if let Some(id) = created.get(key) {
        return Ok(*id);
    }
    let input = inputs
        .get(key)
        .copied()
        .ok_or_else(|| TrackerError::unknown_task(key))?;
    let deadline = parse_timestamp(input.deadline())?;

    let id = match input {
        TaskInput::Simple { description, owner, .. } => {
            store.add_simple_task(users[owner.as_str()], description.clone(), deadline)?
        }
        TaskInput::Composite {
            description,
            owners,
            subtasks,
            ..
        } => {
            let mut children = Vec::with_capacity(subtasks.len());
            for sub in subtasks {
                children.push(create_task(sub, inputs, users, store, created)?);
            }
            let owners = owners.iter().map(|o| users[o.as_str()]).collect();
            store.add_composite_task(children, owners, description.clone(), deadline)?
        }
    };
    created.insert(key.to_string(), id);
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::TimeZone;

    fn sample() -> serde_json::Value {
        serde_json::json!({
            "users": [{"id": "alice", "name": "Alice"}, {"id": "bob", "name": "Bob"}],
            "tasks": [
                {"id": "c1", "kind": "composite", "description": "Composite", "deadline": "2024-01-25",
                 "owners": ["alice", "bob", "alice"], "subtasks": ["t1", "t2"]},
                {"id": "t1", "kind": "simple", "description": "One", "deadline": "2024-01-15", "owner": "alice"},
                {"id": "t2", "kind": "simple", "description": "Two", "deadline": "2024-01-20T12:00:00Z", "owner": "bob"}
            ],
            "project": {"objectives": "Ship it", "deadline": "2024-02-01", "members": ["alice", "bob"]},
            "steps": [
                {"op": "add_task", "task": "c1"},
                {"op": "assign", "task": "c1", "user": "alice"},
                {"op": "complete", "task": "c1", "date": "2024-01-24"},
                {"op": "remove", "task": "c1"}
            ]
        })
    }

    fn parse(v: serde_json::Value) -> Scenario {
        Scenario::from_json(&v.to_string()).unwrap()
    }

    #[test]
    fn test_parse_timestamp_forms() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-01-15").unwrap(), midnight);
        assert_eq!(parse_timestamp("2024-01-15T00:00:00Z").unwrap(), midnight);
        assert_eq!(
            parse_timestamp("2024-01-15T02:00:00+02:00").unwrap(),
            midnight
        );
        let err = parse_timestamp("15/01/2024").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_build_creates_subtasks_before_composite() {
        let ws = parse(sample()).build().unwrap();
        let c1 = ws.task_id("c1").unwrap();
        let composite = ws.store.task(c1).unwrap();
        assert_eq!(
            composite.subtasks(),
            &[ws.task_id("t1").unwrap(), ws.task_id("t2").unwrap()]
        );
        assert_eq!(composite.owners().len(), 2);
        assert!(ws.project.tasks().is_empty());
    }

    #[test]
    fn test_build_links_members_to_project() {
        let ws = parse(sample()).build().unwrap();
        let alice = ws.user_id("alice").unwrap();
        assert_eq!(ws.store.user(alice).unwrap().projects, vec![ws.project.id]);
        assert_eq!(ws.project.eligible_users().len(), 2);
    }

    #[test]
    fn test_unknown_step_kind_rejected() {
        let mut v = sample();
        v["steps"] = serde_json::json!([{"op": "explode", "task": "c1"}]);
        let err = Scenario::from_json(&v.to_string()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_validation_errors() {
        let cases: Vec<(fn(&mut serde_json::Value), &str)> = vec![
            (|v: &mut serde_json::Value| v["project"]["objectives"] = "".into(), "objectives"),
            (|v: &mut serde_json::Value| v["users"][1]["id"] = "alice".into(), "Duplicate user id"),
            (|v: &mut serde_json::Value| v["tasks"][2]["id"] = "t1".into(), "Duplicate task id"),
            (|v: &mut serde_json::Value| v["tasks"][1]["owner"] = "zed".into(), "unknown user 'zed'"),
            (|v: &mut serde_json::Value| v["tasks"][0]["subtasks"][0] = "nope".into(), "unknown subtask 'nope'"),
            (|v: &mut serde_json::Value| v["tasks"][0]["subtasks"][0] = "c1".into(), "contains itself"),
            (|v: &mut serde_json::Value| v["project"]["members"][0] = "zed".into(), "Unknown project member"),
            (|v: &mut serde_json::Value| v["steps"][1]["user"] = "zed".into(), "Step 2: unknown user"),
            (|v: &mut serde_json::Value| v["steps"][0]["task"] = "zz".into(), "Step 1: unknown task"),
            (|v: &mut serde_json::Value| v["steps"][2]["date"] = "soon".into(), "Invalid timestamp"),
        ];
        for (mutate, expected) in cases {
            let mut v = sample();
            mutate(&mut v);
            let err = parse(v).validate().unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError, "{expected}");
            assert!(err.message.contains(expected), "{} !~ {}", err.message, expected);
        }
    }

    #[test]
    fn test_containment_cycle_rejected() {
        let v = serde_json::json!({
            "users": [{"id": "u", "name": "U"}],
            "tasks": [
                {"id": "a", "kind": "composite", "description": "A", "deadline": "2024-01-01", "subtasks": ["b"]},
                {"id": "b", "kind": "composite", "description": "B", "deadline": "2024-01-01", "subtasks": ["a"]}
            ],
            "project": {"objectives": "Loop", "deadline": "2024-02-01", "members": ["u"]}
        });
        let err = parse(v).build().unwrap_err();
        assert_eq!(err.code, ErrorCode::CycleDetected);
    }
}
