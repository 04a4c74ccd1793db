pub mod json;
pub mod text;

use crate::error::TrackerError;

pub fn print_error(e: &TrackerError, json_output: bool) {
    if json_output {
        json::print(&json::error(e));
    } else {
        eprintln!("Error: {}", e.message);
    }
}
