use crate::error::TrackerError;
use crate::scenario::Scenario;

const DEMO_JSON: &str = include_str!("../../scenarios/demo.json");

/// Three users, a composite task sharing two top-level tasks, a removal, one
/// on-time and two late completions.
pub fn scenario() -> Result<Scenario, TrackerError> {
    Scenario::from_json(DEMO_JSON)
}
