//! Hierarchical task tracking: simple and composite tasks, projects that assign,
//! complete and remove them, and a progress report over the task tree.

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod models;
pub mod output;
pub mod project;
pub mod scenario;
pub mod store;

pub use error::{ErrorCode, TrackerError};
pub use models::{Task, TaskId, TaskKind, TaskStatus, User, UserId};
pub use project::{AssignOutcome, Completion, NodeAssignment, ProgressReport, Project, Removal};
pub use store::Store;
