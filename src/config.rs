use crate::cli::Cli;

/// Runtime settings resolved from global flags and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub json_output: bool,
    pub log_filter: String,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            log_filter: cli.log_level.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json_output: false,
            log_filter: "warn".to_string(),
        }
    }
}
