//! Linux installation from the release tarball

use std::path::Path;

use super::descriptor::{DownloadDescriptor, release_dir_name};
use crate::context::TaskContext;
use crate::error::Result;
use crate::host::{ExecOptions, ToolCommand};
use crate::temp;
use crate::version::ShellCheckVersion;

/// Download, unpack under the agent temp directory and put the binary on PATH.
///
/// The release tarballs are xz compressed, not gzip, so the system `tar` is
/// invoked directly and left to detect the compression.
pub fn install(
    ctx: &TaskContext<'_>,
    version: ShellCheckVersion,
    descriptor: &DownloadDescriptor,
) -> Result<()> {
    let tarball = ctx
        .toolkit
        .download_tool(&descriptor.url, Some(&descriptor.local_file_name))?;

    let dir_name = release_dir_name(version);
    let extract_root = temp::agent_temp_dir(ctx.host).join(&dir_name);
    ctx.toolkit.mkdir_p(&extract_root)?;

    let tar = ToolCommand::new("tar").args([
        "xC".to_string(),
        path_arg(&extract_root),
        "-f".to_string(),
        path_arg(&tarball),
    ]);
    ctx.runner.exec(&tar, &ExecOptions::default())?;

    let bin_dir = extract_root.join(&dir_name);
    tracing::info!("ShellCheck {} unpacked to {}", version, bin_dir.display());
    ctx.toolkit.prepend_path(&bin_dir)
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
