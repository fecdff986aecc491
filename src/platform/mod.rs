//! Agent platform model
//!
//! The installer dispatches once on [`Platform`]. Linux carries its CPU
//! architecture because only Linux downloads are architecture specific.

pub mod detection;

use std::fmt;

pub use detection::{detect, agent_arch, agent_os_type};

/// CPU architecture, named the way the pipeline agent reports it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Architecture {
    X64,
    Arm64,
    Other(String),
}

impl Architecture {
    pub fn parse(arch: &str) -> Self {
        match arch {
            "x64" => Self::X64,
            "arm64" => Self::Arm64,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::X64 => "x64",
            Self::Arm64 => "arm64",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating systems ShellCheck can be installed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Linux(Architecture),
    Darwin,
    Windows,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux(arch) => write!(f, "linux ({arch})"),
            Self::Darwin => f.write_str("darwin"),
            Self::Windows => f.write_str("windows_nt"),
        }
    }
}
