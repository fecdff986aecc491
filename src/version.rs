//! ShellCheck release versions
//!
//! Maps the version tokens accepted by the install task to the release tag
//! used in download URLs. Numeric tokens gain a `v` prefix; `latest` and
//! `stable` are release tags of their own.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TaskError, input};

/// Version tokens in the order they are presented to users
pub const ALLOWED_TOKENS: [&str; 6] = ["latest", "stable", "0.6.0", "0.5.0", "0.4.7", "0.4.6"];

/// A ShellCheck release that can be installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellCheckVersion {
    Latest,
    Stable,
    V0_6_0,
    V0_5_0,
    V0_4_7,
    V0_4_6,
}

impl ShellCheckVersion {
    /// Resolve a user supplied token. Tokens are case-sensitive.
    pub fn resolve(token: &str) -> Result<Self> {
        let version = match token {
            "latest" => Self::Latest,
            "stable" => Self::Stable,
            "0.6.0" => Self::V0_6_0,
            "0.5.0" => Self::V0_5_0,
            "0.4.7" => Self::V0_4_7,
            "0.4.6" => Self::V0_4_6,
            other => return Err(input::invalid_version(other, &ALLOWED_TOKENS)),
        };
        Ok(version)
    }

    /// Release tag used in download URLs and archive names
    pub fn canonical(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Stable => "stable",
            Self::V0_6_0 => "v0.6.0",
            Self::V0_5_0 => "v0.5.0",
            Self::V0_4_7 => "v0.4.7",
            Self::V0_4_6 => "v0.4.6",
        }
    }
}

impl FromStr for ShellCheckVersion {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl fmt::Display for ShellCheckVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}
