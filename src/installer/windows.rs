//! Windows installation from the release zip

use super::descriptor::DownloadDescriptor;
use crate::context::TaskContext;
use crate::error::Result;
use crate::version::ShellCheckVersion;

/// Name the executable is given so it resolves as `shellcheck`
pub const EXECUTABLE_NAME: &str = "shellcheck.exe";

pub fn install(
    ctx: &TaskContext<'_>,
    version: ShellCheckVersion,
    descriptor: &DownloadDescriptor,
) -> Result<()> {
    let archive = ctx
        .toolkit
        .download_tool(&descriptor.url, Some(&descriptor.local_file_name))?;
    let extracted = ctx.toolkit.extract_zip(&archive)?;

    ctx.toolkit.mv(
        &extracted.join(format!("shellcheck-{version}.exe")),
        &extracted.join(EXECUTABLE_NAME),
    )?;
    ctx.toolkit.prepend_path(&extracted)
}
