//! Release artifact naming
//!
//! ShellCheck publishes `.tar.xz` archives for Linux and a `.zip` for Windows
//! under one release tag directory. macOS installs through Homebrew and has
//! nothing to download.

use crate::error::{Result, platform};
use crate::platform::{Architecture, Platform};
use crate::version::ShellCheckVersion;

/// GitHub release download root
pub const RELEASES_BASE_URL: &str = "https://github.com/koalaman/shellcheck/releases/download";

/// How a downloaded artifact is unpacked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// `.tar.xz`, unpacked with the system `tar`
    Tar,
    Zip,
}

/// Where to fetch a release from and what to call it locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadDescriptor {
    pub url: String,
    pub local_file_name: String,
    pub extraction: Extraction,
}

impl DownloadDescriptor {
    /// Descriptor for `version` on `platform`; `None` on macOS.
    pub fn resolve(version: ShellCheckVersion, platform: &Platform) -> Result<Option<Self>> {
        match platform {
            Platform::Linux(arch) => Self::linux(version, arch).map(Some),
            Platform::Darwin => Ok(None),
            Platform::Windows => Ok(Some(Self::windows(version))),
        }
    }

    /// Linux tarball. Only x64 and arm64 have release builds.
    pub fn linux(version: ShellCheckVersion, arch: &Architecture) -> Result<Self> {
        let suffix = match arch {
            Architecture::X64 => "x86_64",
            Architecture::Arm64 => "armv6hf",
            Architecture::Other(name) => return Err(platform::unsupported_arch(name.as_str())),
        };
        let file_name = format!("shellcheck-{version}.linux.{suffix}.tar.xz");
        Ok(Self {
            url: format!("{RELEASES_BASE_URL}/{version}/{file_name}"),
            local_file_name: file_name,
            extraction: Extraction::Tar,
        })
    }

    /// Windows zip holding `shellcheck-<version>.exe`
    pub fn windows(version: ShellCheckVersion) -> Self {
        let file_name = format!("shellcheck-{version}.zip");
        Self {
            url: format!("{RELEASES_BASE_URL}/{version}/{file_name}"),
            local_file_name: file_name,
            extraction: Extraction::Zip,
        }
    }
}

/// Directory name inside the Linux tarball, also used for the extraction root
pub fn release_dir_name(version: ShellCheckVersion) -> String {
    format!("shellcheck-{version}")
}
