//! Error types and handling for the ShellCheck tasks
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`input`]: Task input and enum validation errors
//! - [`platform`]: Unsupported operating system / architecture
//! - [`tool`]: Download, archive and process execution errors
//! - [`config`]: Input file errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod input;
pub mod platform;
pub mod tool;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for task operations
#[derive(Error, Diagnostic, Debug)]
pub enum TaskError {
    // Input errors
    #[error("Input required: {name}")]
    #[diagnostic(code(shellcheck_tasks::input::required))]
    InputRequired { name: String },

    #[error("Input '{name}' does not contain a valid boolean value: '{value}'")]
    #[diagnostic(
        code(shellcheck_tasks::input::invalid_boolean),
        help("Use 'true' or 'false'")
    )]
    InvalidBooleanInput { name: String, value: String },

    #[error("Invalid Version: '{token}'. Allowed values are: {allowed} .")]
    #[diagnostic(code(shellcheck_tasks::input::invalid_version))]
    InvalidVersion { token: String, allowed: String },

    #[error("Invalid OutputFormat: '{value}'. Allowed values are: {allowed}.")]
    #[diagnostic(code(shellcheck_tasks::input::invalid_output_format))]
    InvalidOutputFormat { value: String, allowed: String },

    #[error("Invalid ShellDialect: '{value}'. Allowed values are: {allowed}.")]
    #[diagnostic(code(shellcheck_tasks::input::invalid_shell_dialect))]
    InvalidShellDialect { value: String, allowed: String },

    #[error("Invalid file pattern '{pattern}': {reason}")]
    #[diagnostic(code(shellcheck_tasks::input::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    // Platform errors
    #[error("Unsupported Operating System: {name}")]
    #[diagnostic(
        code(shellcheck_tasks::platform::unsupported_os),
        help("ShellCheck can be installed on Linux, macOS and Windows agents")
    )]
    UnsupportedOperatingSystem { name: String },

    #[error("Unsupported architecture {arch}")]
    #[diagnostic(
        code(shellcheck_tasks::platform::unsupported_arch),
        help("Linux agents must run on x64 or arm64")
    )]
    UnsupportedArchitecture { arch: String },

    // Tool errors
    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(code(shellcheck_tasks::tool::download_failed))]
    DownloadFailed { url: String, reason: String },

    #[error("Failed to extract archive {path}: {reason}")]
    #[diagnostic(code(shellcheck_tasks::tool::extract_failed))]
    ExtractFailed { path: String, reason: String },

    #[error("Failed to run {tool}: {reason}")]
    #[diagnostic(code(shellcheck_tasks::tool::exec_failed))]
    ProcessExecFailed { tool: String, reason: String },

    #[error("The process '{tool}' failed with exit code {code}")]
    #[diagnostic(code(shellcheck_tasks::tool::exit_code))]
    ProcessExitCode { tool: String, code: i32 },

    #[error("Unable to locate executable file: '{tool}'")]
    #[diagnostic(
        code(shellcheck_tasks::tool::not_found),
        help("Verify the file path exists or the file can be found within a directory specified by the PATH environment variable")
    )]
    ToolNotFound { tool: String },

    // Configuration errors
    #[error("Failed to read inputs file: {path}")]
    #[diagnostic(code(shellcheck_tasks::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse inputs file: {path}")]
    #[diagnostic(code(shellcheck_tasks::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to move '{from}' to '{to}': {reason}")]
    #[diagnostic(code(shellcheck_tasks::fs::move_failed))]
    MoveFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(shellcheck_tasks::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for TaskError {
    fn from(err: std::io::Error) -> Self {
        TaskError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for TaskError {
    fn from(err: serde_yaml::Error) -> Self {
        TaskError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for TaskError {
    fn from(err: walkdir::Error) -> Self {
        TaskError::IoError {
            message: err.to_string(),
        }
    }
}

impl TaskError {
    /// Whether this is a rejected picklist value that gets its own task message
    pub fn is_input_validation(&self) -> bool {
        matches!(
            self,
            TaskError::InvalidVersion { .. }
                | TaskError::InvalidOutputFormat { .. }
                | TaskError::InvalidShellDialect { .. }
        )
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TaskError>;
