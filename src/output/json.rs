use serde_json::{json, Value};

use crate::error::TrackerError;
use crate::project::ProgressReport;
use crate::scenario::event::StatusEvent;
use crate::scenario::runner::RunOutcome;
use crate::scenario::Scenario;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TrackerError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn print(v: &Value) {
    match serde_json::to_string_pretty(v) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}

pub fn event_json(e: &StatusEvent) -> Value {
    let mut v = serde_json::to_value(e).unwrap_or_else(|_| json!({}));
    v["message"] = json!(e.to_string());
    v
}

pub fn report_json(r: &ProgressReport) -> Value {
    let lines: Vec<_> = r
        .lines
        .iter()
        .map(|l| {
            json!({
                "id": l.task.to_string(),
                "depth": l.depth,
                "description": l.description,
                "status": l.status.as_str(),
                "progress": l.progress
            })
        })
        .collect();
    json!({
        "objectives": r.objectives,
        "tasks": lines,
        "text": r.to_string()
    })
}

pub fn run_json(out: &RunOutcome) -> Value {
    let store = &out.workspace.store;
    let users: Vec<_> = store
        .users()
        .map(|u| {
            let assigned: Vec<_> = u
                .assigned_tasks
                .iter()
                .filter_map(|t| store.description(*t).ok())
                .collect();
            json!({
                "id": u.id.to_string(),
                "name": u.name,
                "assigned_tasks": assigned
            })
        })
        .collect();
    json!({
        "events": out.events.iter().map(event_json).collect::<Vec<_>>(),
        "users": users,
        "report": report_json(&out.report)
    })
}

pub fn check_json(s: &Scenario) -> Value {
    json!({
        "valid": true,
        "objectives": s.project.objectives,
        "users": s.users.len(),
        "tasks": s.tasks.len(),
        "steps": s.steps.len()
    })
}
