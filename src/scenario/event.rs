use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// A status line produced while replaying a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StatusEvent {
    Assigned { task: String, user: String },
    TaskNotInProject { task: String },
    UserNotEligible { user: String },
    Completed { task: String, completed_at: DateTime<Utc> },
    DeadlineMissed { task: String },
    AlreadyCompleted { task: String },
    Removed { task: String },
    Unassigned { task: String, user: String },
}

impl StatusEvent {
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::TaskNotInProject { .. }
                | Self::UserNotEligible { .. }
                | Self::DeadlineMissed { .. }
                | Self::AlreadyCompleted { .. }
        )
    }
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assigned { task, user } => write!(f, "Task \"{task}\" assigned to user \"{user}\"."),
            Self::TaskNotInProject { task } => write!(f, "Task \"{task}\" is not part of the project."),
            Self::UserNotEligible { user } => write!(f, "User \"{user}\" is not a member of the project."),
            Self::Completed { task, completed_at } => write!(
                f,
                "Task \"{task}\" completed on {}.",
                completed_at.to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
            Self::DeadlineMissed { task } => {
                write!(f, "Warning: task \"{task}\" was completed after its deadline.")
            }
            Self::AlreadyCompleted { task } => write!(f, "Task \"{task}\" is already completed."),
            Self::Removed { task } => write!(f, "Task \"{task}\" removed from the project."),
            Self::Unassigned { task, user } => write!(f, "Task \"{task}\" removed from user \"{user}\"."),
        }
    }
}
