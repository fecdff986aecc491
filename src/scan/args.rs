//! ShellCheck command line assembly
//!
//! The order of the arguments is part of the contract with the analyzer:
//! scripts first, then switches, then `-e` pairs, `-f` and finally `-s`.

use std::path::Path;

use super::{ScanConfiguration, ShellDialect};
use crate::host::ToolCommand;
use crate::path_utils;

/// Executable name of the analyzer
pub const TOOL_NAME: &str = "shellcheck";

/// Build the argument list for one ShellCheck invocation.
///
/// Script paths under `root` are passed relative to it so the analyzer's
/// output does not depend on where the agent checked out the sources.
pub fn build_args(config: &ScanConfiguration, root: &Path) -> Vec<String> {
    let scripts = config
        .script_files
        .iter()
        .map(|script| path_utils::strip_root(script, root));

    let mut command = ToolCommand::new(TOOL_NAME)
        .args(scripts)
        .arg_if(config.follow_sourced_files, "-x")
        .arg_if(config.check_sourced_files, "-a")
        .arg_if(!config.use_rc_files, "--norc");

    for code in &config.ignored_error_codes {
        command = command.arg("-e").arg(code.as_str());
    }

    command = command.arg("-f").arg(config.output_format.as_str());

    if config.shell_dialect != ShellDialect::Default {
        command = command.arg("-s").arg(config.shell_dialect.as_str());
    }
    command.args
}

/// The full `shellcheck` invocation for `config`
pub fn build_command(config: &ScanConfiguration, root: &Path) -> ToolCommand {
    ToolCommand::new(TOOL_NAME).args(build_args(config, root))
}
