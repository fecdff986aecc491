//! The ShellCheck installer task

use super::report_error;
use crate::context::TaskContext;
use crate::error::Result;
use crate::installer;
use crate::version::ShellCheckVersion;

/// Task input holding the requested version token
pub const VERSION_INPUT: &str = "version";

/// Run the install task. Failures are reported, never returned.
///
/// A successful install sets no result; the pipeline marks the step as
/// succeeded on its own.
pub fn run(ctx: &TaskContext<'_>) {
    if let Err(err) = install(ctx) {
        report_error(ctx.reporter, &err);
    }
}

fn install(ctx: &TaskContext<'_>) -> Result<()> {
    let token = ctx
        .inputs
        .get_input(VERSION_INPUT, true)?
        .unwrap_or_default();
    let version = ShellCheckVersion::resolve(&token)?;
    tracing::debug!("Requested ShellCheck version {token} resolved to {version}");
    installer::install(ctx, version)
}
