use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "projtrack",
    version,
    about = "Hierarchical project task tracker",
    after_help = "\
SCENARIO FORMAT:
  {\"users\":[{\"id\":\"alice\",\"name\":\"Alice\"}],
   \"tasks\":[{\"id\":\"t1\",\"kind\":\"simple\",\"description\":\"...\",\"deadline\":\"2024-01-15\",\"owner\":\"alice\"},
            {\"id\":\"c1\",\"kind\":\"composite\",\"description\":\"...\",\"deadline\":\"2024-01-25\",
             \"owners\":[\"alice\"],\"subtasks\":[\"t1\"]}],
   \"project\":{\"objectives\":\"...\",\"deadline\":\"2024-02-01\",\"members\":[\"alice\"]},
   \"steps\":[{\"op\":\"add_task\",\"task\":\"t1\"}, {\"op\":\"assign\",\"task\":\"t1\",\"user\":\"alice\"},
            {\"op\":\"complete\",\"task\":\"t1\",\"date\":\"2024-01-14\"}, {\"op\":\"remove\",\"task\":\"t1\"}]}

EXIT CODES:
  0  Success (rejected operations are reported as status lines)
  1  Error (unreadable or invalid scenario)

BEHAVIOR NOTES:
  Assigning a composite task walks its subtasks first; only nodes that are
  top-level tasks of the project are recorded on the user.
  Completion and removal only match top-level tasks.
  Completed tasks cannot be completed again."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter (tracing EnvFilter syntax), written to stderr
    #[arg(long, global = true, env = "PROJTRACK_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a scenario and print status lines and the progress report
    Run {
        /// Scenario JSON file (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },

    /// Validate a scenario without replaying it
    Check {
        /// Scenario JSON file (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },

    /// Replay the built-in demo scenario
    Demo,
}
