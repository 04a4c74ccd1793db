use crate::error::TrackerError;
use crate::models::{TaskId, TaskKind, TaskStatus};
use crate::store::Store;

/// Highest progress an unfinished composite can report.
const OPEN_COMPOSITE_CAP: u32 = 99;

impl Store {
    /// Progress of a task in `0..=100`.
    ///
    /// A completed task is 100. An open simple task is 0. An open composite is
    /// the floored mean of its subtasks' progress, 0 with no subtasks, and
    /// never reaches 100 while it is itself open.
    pub fn track_progress(&self, id: TaskId) -> Result<u8, TrackerError> {
        let task = self.task(id)?;
        if task.status() == TaskStatus::Completed {
            return Ok(100);
        }
        match task.kind() {
            TaskKind::Simple { .. } => Ok(0),
            TaskKind::Composite { subtasks, .. } => {
                if subtasks.is_empty() {
                    return Ok(0);
                }
                let mut total: u32 = 0;
                for sub in subtasks {
                    total += u32::from(self.track_progress(*sub)?);
                }
                let mean = total / subtasks.len() as u32;
                Ok(mean.min(OPEN_COMPOSITE_CAP) as u8)
            }
        }
    }

    /// True if the task was completed after its deadline, or for a composite,
    /// if any descendant was.
    pub fn check_deadline_violation(&self, id: TaskId) -> Result<bool, TrackerError> {
        let task = self.task(id)?;
        if task.is_late() {
            return Ok(true);
        }
        for sub in task.subtasks() {
            if self.check_deadline_violation(*sub)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
