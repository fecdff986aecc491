//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - scan: Scan command arguments
//! - completions: Completions command arguments
//!
//! Task inputs are optional on the command line. Anything left unset falls
//! back to the `INPUT_<NAME>` variable the pipeline agent exports, then to
//! the `--inputs` file, then to the task default.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod scan;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use scan::ScanArgs;

/// Install ShellCheck and scan shell scripts with it
#[derive(Parser, Debug)]
#[command(
    name = "shellcheck-tasks",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install ShellCheck and scan shell scripts in a pipeline",
    long_about = "Pipeline tasks for ShellCheck: install a release of the analyzer on the agent, \
                  and scan the shell scripts of a repository with it. Results are reported with \
                  agent logging commands.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  shellcheck-tasks install --version stable      \x1b[90m# Install the stable release\x1b[0m\n   \
                  shellcheck-tasks scan                          \x1b[90m# Check **/*.sh\x1b[0m\n   \
                  shellcheck-tasks scan --output-format gcc      \x1b[90m# Check with gcc style output\x1b[0m\n   \
                  shellcheck-tasks scan --install-missing        \x1b[90m# Install ShellCheck when absent\x1b[0m\n   \
                  shellcheck-tasks --inputs task.yaml scan       \x1b[90m# Read inputs from a file\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// YAML file mapping task input names to values
    #[arg(long, global = true, value_name = "FILE")]
    pub inputs: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install ShellCheck on the agent
    Install(InstallArgs),

    /// Scan shell scripts with ShellCheck
    Scan(ScanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    #[command(hide = true)]
    Version,
}
