//! macOS installation through Homebrew

use crate::context::TaskContext;
use crate::error::Result;
use crate::host::{ExecOptions, ToolCommand};
use crate::version::ShellCheckVersion;

/// Warning shown when a version other than `stable` is requested on macOS
pub fn custom_version_warning(version: ShellCheckVersion) -> String {
    format!(
        "ShellCheck is installed with Homebrew on Mac. Installing custom versions is not yet supported on Mac agents. \
         Unable to install custom version: {version}. \
         To get rid of this warning, change your target version to 'stable' or switch your pipeline to a different OS"
    )
}

/// Homebrew only offers its own formula version; other requests warn and proceed.
pub fn install(ctx: &TaskContext<'_>, version: ShellCheckVersion) -> Result<()> {
    if version != ShellCheckVersion::Stable {
        ctx.reporter.warning(&custom_version_warning(version));
    }

    let brew = ToolCommand::new("brew").arg("install").arg("shellcheck");
    let options = ExecOptions {
        silent: true,
        ..ExecOptions::default()
    };
    ctx.runner.exec(&brew, &options)?;
    Ok(())
}
