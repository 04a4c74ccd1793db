use std::path::Path;

use crate::cli::read_scenario;
use crate::config::Config;
use crate::error::TrackerError;
use crate::output;
use crate::scenario::{runner, Scenario};

pub fn run(file: Option<&Path>, config: &Config) -> i32 {
    finish(read_scenario(file).and_then(|s| replay(&s, config)), config)
}

pub fn check(file: Option<&Path>, config: &Config) -> i32 {
    let result = read_scenario(file).and_then(|s| {
        s.validate()?;
        if config.json_output {
            output::json::print(&output::json::success(output::json::check_json(&s)));
        } else {
            output::text::print_check(&s);
        }
        Ok(0)
    });
    finish(result, config)
}

pub(crate) fn replay(scenario: &Scenario, config: &Config) -> Result<i32, TrackerError> {
    let out = runner::run(scenario)?;
    if config.json_output {
        output::json::print(&output::json::success(output::json::run_json(&out)));
    } else {
        output::text::print_events(&out.events);
        output::text::print_report(&out.report);
    }
    Ok(0)
}

pub(crate) fn finish(result: Result<i32, TrackerError>, config: &Config) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            output::print_error(&e, config.json_output);
            1
        }
    }
}
