use clap::Parser;
use std::process;

use projtrack::cli::{self, Cli, Commands};
use projtrack::config::Config;
use projtrack::logging;

fn main() {
    let cli_args = Cli::parse();
    let config = Config::from_cli(&cli_args);

    if let Err(e) = logging::init(&config.log_filter) {
        eprintln!("Warning: {e:#}");
    }

    let exit_code = match cli_args.command {
        Commands::Run { file } => cli::run::run(file.as_deref(), &config),
        Commands::Check { file } => cli::run::check(file.as_deref(), &config),
        Commands::Demo => cli::demo::run(&config),
    };

    process::exit(exit_code);
}
