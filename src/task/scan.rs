//! The ShellCheck scan task
//!
//! Reads and validates the inputs, expands the target pattern, makes sure the
//! analyzer is available and runs it once over every matched script. The
//! analyzer's exit code decides the task result.

use std::path::Path;

use super::report_error;
use crate::context::TaskContext;
use crate::error::Result;
use crate::host::{ExecOptions, TaskResult};
use crate::installer;
use crate::scan::{OutputFormat, ScanConfiguration, ShellDialect, TOOL_NAME, build_command};
use crate::version::ShellCheckVersion;

pub const SUCCESS_MESSAGE: &str = "ShellCheck scan succeeded!";
pub const FAILURE_MESSAGE: &str = "ShellCheck scan failed! Check the logs for violation details.";
pub const NOT_FOUND_MESSAGE: &str = "ShellCheck executable not found. Add the ShellCheck Installer task to your pipeline, or manually install ShellCheck on your agent";

/// Task input names
pub mod inputs {
    pub const TARGET_FILES: &str = "targetFiles";
    pub const FOLLOW_SOURCED_FILES: &str = "followSourcedFiles";
    pub const CHECK_SOURCED_FILES: &str = "checkSourcedFiles";
    pub const IGNORED_ERROR_CODES: &str = "ignoredErrorCodes";
    pub const OUTPUT_FORMAT: &str = "outputFormat";
    pub const SHELL_DIALECT: &str = "shellDialect";
    pub const USE_RC_FILES: &str = "useRcFiles";
}

/// What to do when `shellcheck` is not on the search path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingBinary {
    /// Fail with instructions to add the installer
    #[default]
    Fail,
    /// Install the stable release first
    Install,
}

/// Warning reported when the target pattern matches nothing
pub fn no_files_message(target_files: &str) -> String {
    format!("No shell files found for input '{target_files}'.")
}

/// Run the scan task. Failures are reported, never returned.
pub fn run(ctx: &TaskContext<'_>, missing: MissingBinary) {
    if let Err(err) = scan(ctx, missing) {
        report_error(ctx.reporter, &err);
    }
}

/// Validated inputs, before file discovery
struct ScanInputs {
    target_files: String,
    config: ScanConfiguration,
}

fn read_inputs(ctx: &TaskContext<'_>) -> Result<ScanInputs> {
    let input = ctx.inputs;
    let target_files = input
        .get_input(inputs::TARGET_FILES, true)?
        .unwrap_or_default();
    let follow_sourced_files = input.get_bool_input(inputs::FOLLOW_SOURCED_FILES, true)?;
    let check_sourced_files = input.get_bool_input(inputs::CHECK_SOURCED_FILES, true)?;
    let ignored_error_codes = input.get_delimited_input(inputs::IGNORED_ERROR_CODES, "\n", false)?;
    let use_rc_files = input.get_bool_input(inputs::USE_RC_FILES, true)?;

    let output_format: OutputFormat = input
        .get_input(inputs::OUTPUT_FORMAT, true)?
        .unwrap_or_default()
        .parse()?;
    let shell_dialect: ShellDialect = input
        .get_input(inputs::SHELL_DIALECT, true)?
        .unwrap_or_default()
        .parse()?;

    Ok(ScanInputs {
        target_files,
        config: ScanConfiguration {
            script_files: Vec::new(),
            follow_sourced_files,
            check_sourced_files,
            ignored_error_codes,
            output_format,
            shell_dialect,
            use_rc_files,
        },
    })
}

fn scan(ctx: &TaskContext<'_>, missing: MissingBinary) -> Result<()> {
    let ScanInputs {
        target_files,
        mut config,
    } = read_inputs(ctx)?;

    let root = ctx.host.cwd()?;
    config.script_files = ctx.files.find_match(&root, &target_files)?;
    if config.script_files.is_empty() {
        ctx.reporter.warning(&no_files_message(&target_files));
        return Ok(());
    }
    tracing::debug!("{} script(s) matched '{}'", config.script_files.len(), target_files);

    if !ensure_installed(ctx, missing)? {
        ctx.reporter
            .set_result(TaskResult::Failed, NOT_FOUND_MESSAGE, true);
        return Ok(());
    }

    let code = invoke(ctx, &config, &root)?;
    if code == 0 {
        ctx.reporter
            .set_result(TaskResult::Succeeded, SUCCESS_MESSAGE, true);
    } else {
        ctx.reporter
            .debug(&format!("ShellCheck exited with code {code}"));
        ctx.reporter
            .set_result(TaskResult::Failed, FAILURE_MESSAGE, true);
    }
    Ok(())
}

/// Whether the analyzer can be run, installing it first if allowed
fn ensure_installed(ctx: &TaskContext<'_>, missing: MissingBinary) -> Result<bool> {
    if let Some(path) = ctx.host.which(TOOL_NAME, false)? {
        tracing::debug!("Using ShellCheck at {}", path.display());
        return Ok(true);
    }
    match missing {
        MissingBinary::Fail => Ok(false),
        MissingBinary::Install => {
            ctx.reporter.debug("ShellCheck not found. Installing now...");
            installer::install(ctx, ShellCheckVersion::Stable)?;
            Ok(true)
        }
    }
}

fn invoke(ctx: &TaskContext<'_>, config: &ScanConfiguration, root: &Path) -> Result<i32> {
    let command = build_command(config, root);
    let options = ExecOptions {
        ignore_return_code: true,
        ..ExecOptions::default()
    };
    ctx.runner.exec(&command, &options)
}
