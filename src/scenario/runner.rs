use tracing::{info, warn};

use crate::error::{ErrorCode, TrackerError};
use crate::project::{AssignOutcome, ProgressReport};
use crate::scenario::event::StatusEvent;
use crate::scenario::{parse_timestamp, Scenario, Step, Workspace};

#[derive(Debug)]
pub struct RunOutcome {
    pub events: Vec<StatusEvent>,
    pub report: ProgressReport,
    pub workspace: Workspace,
}

/// Builds the scenario, replays every step in order and produces the final report.
///
/// Rejections from the project (ineligible user, task outside the project,
/// second completion) become status lines and replay continues. Anything else
/// aborts the run.
pub fn run(scenario: &Scenario) -> Result<RunOutcome, TrackerError> {
    let mut ws = scenario.build()?;
    let mut events = Vec::new();

    for (i, step) in scenario.steps.iter().enumerate() {
        let before = events.len();
        apply_step(&mut ws, step, &mut events)?;
        for e in &events[before..] {
            if e.is_warning() {
                warn!(step = i + 1, "{e}");
            }
        }
    }

    let report = ws.project.generate_progress_report(&ws.store)?;
    info!(steps = scenario.steps.len(), events = events.len(), "scenario replayed");
    Ok(RunOutcome {
        events,
        report,
        workspace: ws,
    })
}

fn apply_step(ws: &mut Workspace, step: &Step, events: &mut Vec<StatusEvent>) -> Result<(), TrackerError> {
    match step {
        Step::AddTask { task } => {
            let id = ws.task_id(task)?;
            ws.project.add_task(&ws.store, id)?;
        }
        Step::Assign { task, user } => {
            let task_id = ws.task_id(task)?;
            let user_id = ws.user_id(user)?;
            let user_name = ws.store.user(user_id)?.name.clone();
            match ws.project.assign_task(&mut ws.store, task_id, user_id) {
                Ok(nodes) => {
                    for node in nodes {
                        let description = ws.store.description(node.task)?.to_string();
                        events.push(match node.outcome {
                            AssignOutcome::Assigned => StatusEvent::Assigned {
                                task: description,
                                user: user_name.clone(),
                            },
                            AssignOutcome::NotInProject => StatusEvent::TaskNotInProject { task: description },
                        });
                    }
                }
                Err(e) if e.code == ErrorCode::NotEligibleUser => {
                    events.push(StatusEvent::UserNotEligible { user: user_name });
                }
                Err(e) => return Err(e),
            }
        }
        Step::Complete { task, date } => {
            let task_id = ws.task_id(task)?;
            let description = ws.store.description(task_id)?.to_string();
            let at = parse_timestamp(date)?;
            match ws.project.complete_task(&mut ws.store, task_id, at) {
                Ok(done) => {
                    events.push(StatusEvent::Completed {
                        task: description.clone(),
                        completed_at: done.completed_at,
                    });
                    if done.deadline_violated {
                        events.push(StatusEvent::DeadlineMissed { task: description });
                    }
                }
                Err(e) => events.push(rejection(e, description)?),
            }
        }
        Step::Remove { task } => {
            let task_id = ws.task_id(task)?;
            let description = ws.store.description(task_id)?.to_string();
            match ws.project.remove_task(&mut ws.store, task_id) {
                Ok(removal) => {
                    events.push(StatusEvent::Removed {
                        task: description.clone(),
                    });
                    if let Some(user) = removal.unassigned_from {
                        events.push(StatusEvent::Unassigned {
                            task: description,
                            user: ws.store.user(user)?.name.clone(),
                        });
                    }
                }
                Err(e) => events.push(rejection(e, description)?),
            }
        }
    }
    Ok(())
}

fn rejection(e: TrackerError, task: String) -> Result<StatusEvent, TrackerError> {
    match e.code {
        ErrorCode::TaskNotFound => Ok(StatusEvent::TaskNotInProject { task }),
        ErrorCode::InvalidStatusTransition => Ok(StatusEvent::AlreadyCompleted { task }),
        _ => Err(e),
    }
}
