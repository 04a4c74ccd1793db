use std::fmt;

use serde::Serialize;

use crate::models::{TaskId, TaskStatus};

/// One node of the report, in depth-first pre-order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub task: TaskId,
    pub depth: usize,
    pub description: String,
    pub status: TaskStatus,
    pub progress: u8,
}

/// Read-only snapshot of a project's task tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    pub objectives: String,
    pub lines: Vec<ReportLine>,
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Progress Report for Project \"{}\":", self.objectives)?;
        for line in &self.lines {
            writeln!(
                f,
                "{:indent$}- Description: {}, Status: {}, Progress: {}%",
                "",
                line.description,
                line.status.label(),
                line.progress,
                indent = line.depth * 2
            )?;
        }
        Ok(())
    }
}
