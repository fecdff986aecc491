//! Scan configuration for the ShellCheck analyzer
//!
//! - [`OutputFormat`] and [`ShellDialect`] are the validated picklist inputs
//! - [`ScanConfiguration`] is everything the argument builder needs
//! - [`args`] turns a configuration into the analyzer's command line

pub mod args;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Result, TaskError, input};

pub use args::{TOOL_NAME, build_command};

/// Report formats understood by `shellcheck -f`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Tty,
    Checkstyle,
    Gcc,
    Json,
}

impl OutputFormat {
    /// Accepted values, in the order they are presented to users
    pub const ALLOWED: [&'static str; 4] = ["tty", "checkstyle", "gcc", "json"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tty => "tty",
            Self::Checkstyle => "checkstyle",
            Self::Gcc => "gcc",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tty" => Ok(Self::Tty),
            "checkstyle" => Ok(Self::Checkstyle),
            "gcc" => Ok(Self::Gcc),
            "json" => Ok(Self::Json),
            other => Err(input::invalid_output_format(other, &Self::ALLOWED)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shell grammar the analyzer should assume
///
/// `Default` lets ShellCheck infer the dialect from the shebang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellDialect {
    #[default]
    Default,
    Bash,
    Dash,
    Ksh,
    Sh,
}

impl ShellDialect {
    /// Accepted values, in the order they are presented to users
    pub const ALLOWED: [&'static str; 5] = ["default", "bash", "dash", "ksh", "sh"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Bash => "bash",
            Self::Dash => "dash",
            Self::Ksh => "ksh",
            Self::Sh => "sh",
        }
    }
}

impl FromStr for ShellDialect {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "default" => Ok(Self::Default),
            "bash" => Ok(Self::Bash),
            "dash" => Ok(Self::Dash),
            "ksh" => Ok(Self::Ksh),
            "sh" => Ok(Self::Sh),
            other => Err(input::invalid_shell_dialect(other, &Self::ALLOWED)),
        }
    }
}

impl fmt::Display for ShellDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated scan request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanConfiguration {
    /// Scripts to check, as returned by file discovery
    pub script_files: Vec<PathBuf>,
    /// `-x`: follow `source` directives
    pub follow_sourced_files: bool,
    /// `-a`: also report issues found in sourced files
    pub check_sourced_files: bool,
    /// Codes passed through `-e`, in order
    pub ignored_error_codes: Vec<String>,
    pub output_format: OutputFormat,
    pub shell_dialect: ShellDialect,
    /// When false, `--norc` stops ShellCheck reading `.shellcheckrc`
    pub use_rc_files: bool,
}
