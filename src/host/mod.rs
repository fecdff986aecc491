//! Collaborators the tasks need from the pipeline agent
//!
//! Every interaction with the outside world goes through one of these traits:
//! - [`InputSource`]: typed task inputs
//! - [`FileMatcher`]: glob expansion
//! - [`ProcessRunner`]: running external tools
//! - [`Toolkit`]: downloads, archives and search path placement
//! - [`Reporter`]: task results, warnings and debug lines
//! - [`Host`]: OS, architecture, working directory and pipeline variables
//!
//! The `System*` types in the submodules talk to the real agent. Tests use
//! the recording fakes in `test_fixtures`.

pub mod discovery;
pub mod inputs;
pub mod reporter;
pub mod search_path;
pub mod system;
pub mod toolkit;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, input};

pub use discovery::GlobMatcher;
pub use inputs::{LayeredInputs, MapInputs};
pub use reporter::PipelineReporter;
pub use search_path::SearchPath;
pub use system::{SystemHost, SystemRunner};
pub use toolkit::SystemToolkit;

/// Source of task inputs
///
/// Implementors only expose raw values; trimming, required checks and
/// type conversion are shared.
pub trait InputSource {
    /// Raw value of an input, if it was supplied at all
    fn raw_input(&self, name: &str) -> Option<String>;

    /// Trimmed string value. Empty values count as missing.
    fn get_input(&self, name: &str, required: bool) -> Result<Option<String>> {
        let value = self
            .raw_input(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        match value {
            None if required => Err(input::required(name)),
            other => Ok(other),
        }
    }

    /// `true`/`false`, case-insensitive. A missing optional input is `false`.
    fn get_bool_input(&self, name: &str, required: bool) -> Result<bool> {
        match self.get_input(name, required)? {
            None => Ok(false),
            Some(value) if value.eq_ignore_ascii_case("true") => Ok(true),
            Some(value) if value.eq_ignore_ascii_case("false") => Ok(false),
            Some(value) => Err(input::invalid_boolean(name, value)),
        }
    }

    /// Split on `delimiter`, trimming entries and dropping empty ones
    fn get_delimited_input(
        &self,
        name: &str,
        delimiter: &str,
        required: bool,
    ) -> Result<Vec<String>> {
        let Some(value) = self.get_input(name, required)? else {
            return Ok(Vec::new());
        };
        Ok(value
            .split(delimiter)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Glob expansion
pub trait FileMatcher {
    /// Expand `pattern` (relative patterns are rooted at `base`) to absolute file paths
    fn find_match(&self, base: &Path, pattern: &str) -> Result<Vec<PathBuf>>;
}

/// An external tool invocation under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub tool: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    #[must_use]
    pub fn arg_if(self, condition: bool, value: impl Into<String>) -> Self {
        if condition { self.arg(value) } else { self }
    }

    #[must_use]
    pub fn args<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tool)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How a tool is run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecOptions {
    /// Suppress the tool's output
    pub silent: bool,
    /// Return nonzero exit codes instead of failing
    pub ignore_return_code: bool,
}

/// External process execution
pub trait ProcessRunner {
    /// Run `command` to completion and return its exit code.
    ///
    /// Fails on spawn errors, and on nonzero exit codes unless
    /// `options.ignore_return_code` is set.
    fn exec(&self, command: &ToolCommand, options: &ExecOptions) -> Result<i32>;
}

/// Download and placement helpers
pub trait Toolkit {
    /// Download `url` into the agent temp directory and return the local path
    fn download_tool(&self, url: &str, file_name: Option<&str>) -> Result<PathBuf>;
    /// Extract a zip archive into a fresh directory and return it
    fn extract_zip(&self, archive: &Path) -> Result<PathBuf>;
    /// Put `dir` in front of the executable search path
    fn prepend_path(&self, dir: &Path) -> Result<()>;
    fn mkdir_p(&self, dir: &Path) -> Result<()>;
    fn mv(&self, from: &Path, to: &Path) -> Result<()>;
}

/// Final state of a task run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskResult {
    Succeeded,
    Failed,
}

impl TaskResult {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for TaskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result reporting and task log output
pub trait Reporter {
    fn set_result(&self, result: TaskResult, message: &str, done: bool);
    fn warning(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Environment probes
pub trait Host {
    /// `Linux`, `Darwin`, `Windows_NT`, ...
    fn os_type(&self) -> String;
    /// `x64`, `arm64`, ...
    fn os_arch(&self) -> String;
    /// Locate `tool` on the search path. Fails when `required` and absent.
    fn which(&self, tool: &str, required: bool) -> Result<Option<PathBuf>>;
    fn cwd(&self) -> Result<PathBuf>;
    /// Pipeline variable such as `Agent.TempDirectory`
    fn get_variable(&self, name: &str) -> Option<String>;
}
