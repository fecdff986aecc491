//! Platform detection from the agent's reported OS type and architecture

use super::{Architecture, Platform};
use crate::error::{Result, platform};

/// Map an OS type (`Linux`, `Darwin`, `Windows_NT`) and architecture to a [`Platform`].
///
/// OS names are compared case-insensitively. The architecture is only
/// interpreted on Linux; unsupported Linux architectures are rejected by the
/// installer, not here, so the error names the architecture it saw.
pub fn detect(os_type: &str, arch: &str) -> Result<Platform> {
    match os_type.to_lowercase().as_str() {
        "linux" => Ok(Platform::Linux(Architecture::parse(arch))),
        "darwin" => Ok(Platform::Darwin),
        "windows_nt" => Ok(Platform::Windows),
        other => Err(platform::unsupported_os(other)),
    }
}

/// The OS type of the running process, in the agent's naming
pub fn agent_os_type() -> String {
    match std::env::consts::OS {
        "linux" => "Linux".to_string(),
        "macos" => "Darwin".to_string(),
        "windows" => "Windows_NT".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        other => other.to_string(),
    }
}

/// The CPU architecture of the running process, in the agent's naming
pub fn agent_arch() -> String {
    match std::env::consts::ARCH {
        "x86_64" => "x64".to_string(),
        "aarch64" => "arm64".to_string(),
        "x86" => "ia32".to_string(),
        "powerpc64" => "ppc64".to_string(),
        other => other.to_string(),
    }
}
