//! shellcheck-tasks - ShellCheck pipeline tasks
//!
//! Installs a ShellCheck release on a pipeline agent, and scans the shell
//! scripts of a repository with it, reporting the outcome with agent
//! logging commands.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;
mod error;
mod host;
mod installer;
mod path_utils;
mod platform;
mod scan;
mod task;
mod temp;
mod version;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let inputs_file = cli.inputs.as_deref();
    let result = match &cli.command {
        Commands::Install(args) => commands::install::run(inputs_file, cli.verbose, args),
        Commands::Scan(args) => commands::scan::run(inputs_file, cli.verbose, args),
        Commands::Completions(args) => commands::completions::run(args).map(|()| true),
        Commands::Version => commands::version::run().map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
