pub mod commands;
pub mod demo;
pub mod run;

pub use commands::*;

use std::io::{self, Read};
use std::path::Path;

use crate::error::TrackerError;
use crate::scenario::Scenario;

/// Reads a scenario from `file`, or from stdin when `file` is `None` or `-`.
pub fn read_scenario(file: Option<&Path>) -> Result<Scenario, TrackerError> {
    let input = match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| TrackerError::io(format!("Cannot read {}: {e}", path.display())))?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Scenario::from_json(&input)
}
