//! ShellCheck installation
//!
//! One pass through exactly one platform branch:
//! - Linux: release tarball, unpacked with the system `tar`
//! - macOS: `brew install shellcheck`
//! - Windows: release zip, executable renamed to `shellcheck.exe`
//!
//! Errors from any step propagate unchanged; there is no retry.

pub mod descriptor;
pub mod linux;
pub mod mac;
pub mod windows;

use crate::context::TaskContext;
use crate::error::Result;
use crate::platform;
use crate::version::ShellCheckVersion;

use descriptor::{DownloadDescriptor, Extraction};

/// Install `version` for the platform the host reports
pub fn install(ctx: &TaskContext<'_>, version: ShellCheckVersion) -> Result<()> {
    let platform = platform::detect(&ctx.host.os_type(), &ctx.host.os_arch())?;
    tracing::debug!("Installing ShellCheck {} for {}", version, platform);

    match DownloadDescriptor::resolve(version, &platform)? {
        None => mac::install(ctx, version),
        Some(descriptor) => match descriptor.extraction {
            Extraction::Tar => linux::install(ctx, version, &descriptor),
            Extraction::Zip => windows::install(ctx, version, &descriptor),
        },
    }
}
