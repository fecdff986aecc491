//! Recording fakes for the agent collaborators.
//!
//! Each fake records what the task asked of it so tests can assert on the
//! exact calls, and can be told what to answer.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::Fakes;
//!
//! #[test]
//! fn my_test() {
//!     let fakes = Fakes::new(FakeHost::linux("x64"));
//!     crate::task::install::run(&fakes.context());
//!     assert!(fakes.reporter.results().is_empty());
//! }
//! ```

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::context::TaskContext;
use crate::error::{Result, fs, tool};
use crate::host::{
    ExecOptions, FileMatcher, Host, MapInputs, ProcessRunner, Reporter, TaskResult, ToolCommand,
    Toolkit,
};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Host with fixed answers
pub struct FakeHost {
    pub os_type: String,
    pub arch: String,
    pub cwd: PathBuf,
    pub variables: HashMap<String, String>,
    pub installed_at: Option<PathBuf>,
    pub which_calls: RefCell<Vec<(String, bool)>>,
}

impl FakeHost {
    pub fn new(os_type: &str, arch: &str) -> Self {
        Self {
            os_type: os_type.to_string(),
            arch: arch.to_string(),
            cwd: PathBuf::from("/users/me/test"),
            variables: HashMap::new(),
            installed_at: Some(PathBuf::from("/usr/bin/shellcheck")),
            which_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn linux(arch: &str) -> Self {
        Self::new("Linux", arch)
    }

    pub fn darwin() -> Self {
        Self::new("Darwin", "x64")
    }

    pub fn windows() -> Self {
        Self::new("Windows_NT", "x64")
    }

    #[must_use]
    pub fn with_variable(mut self, name: &str, value: &str) -> Self {
        self.variables.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_cwd(mut self, cwd: &str) -> Self {
        self.cwd = PathBuf::from(cwd);
        self
    }

    /// ShellCheck is not on the search path
    #[must_use]
    pub fn without_shellcheck(mut self) -> Self {
        self.installed_at = None;
        self
    }
}

impl Host for FakeHost {
    fn os_type(&self) -> String {
        self.os_type.clone()
    }

    fn os_arch(&self) -> String {
        self.arch.clone()
    }

    fn which(&self, tool_name: &str, required: bool) -> Result<Option<PathBuf>> {
        self.which_calls
            .borrow_mut()
            .push((tool_name.to_string(), required));
        match &self.installed_at {
            Some(path) => Ok(Some(path.clone())),
            None if required => Err(tool::not_found(tool_name)),
            None => Ok(None),
        }
    }

    fn cwd(&self) -> Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn get_variable(&self, name: &str) -> Option<String> {
        self.variables.get(name).cloned()
    }
}

/// Runner that records commands and answers with a fixed exit code
#[derive(Default)]
pub struct FakeRunner {
    pub exit_code: Cell<i32>,
    pub spawn_error: RefCell<Option<String>>,
    pub calls: RefCell<Vec<(ToolCommand, ExecOptions)>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exiting_with(code: i32) -> Self {
        let runner = Self::default();
        runner.exit_code.set(code);
        runner
    }

    pub fn failing_with(message: &str) -> Self {
        let runner = Self::default();
        *runner.spawn_error.borrow_mut() = Some(message.to_string());
        runner
    }

    pub fn commands(&self) -> Vec<ToolCommand> {
        self.calls.borrow().iter().map(|(c, _)| c.clone()).collect()
    }
}

impl ProcessRunner for FakeRunner {
    fn exec(&self, command: &ToolCommand, options: &ExecOptions) -> Result<i32> {
        self.calls.borrow_mut().push((command.clone(), *options));
        if let Some(message) = self.spawn_error.borrow().as_ref() {
            return Err(tool::exec_failed(&command.tool, message));
        }
        let code = self.exit_code.get();
        if code != 0 && !options.ignore_return_code {
            return Err(tool::exit_code(&command.tool, code));
        }
        Ok(code)
    }
}

/// One recorded toolkit call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolkitCall {
    Download {
        url: String,
        file_name: Option<String>,
    },
    ExtractZip(PathBuf),
    PrependPath(PathBuf),
    MkdirP(PathBuf),
    Mv(PathBuf, PathBuf),
}

/// Toolkit that records calls without touching the network or disk
pub struct FakeToolkit {
    pub download_dir: PathBuf,
    pub extract_dir: PathBuf,
    pub download_error: Option<String>,
    pub calls: RefCell<Vec<ToolkitCall>>,
}

impl Default for FakeToolkit {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("/foo/bar"),
            extract_dir: PathBuf::from("/foo/extracted"),
            download_error: None,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_downloads(message: &str) -> Self {
        Self {
            download_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<ToolkitCall> {
        self.calls.borrow().clone()
    }

    pub fn downloads(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ToolkitCall::Download { url, .. } => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn prepended(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ToolkitCall::PrependPath(dir) => Some(dir),
                _ => None,
            })
            .collect()
    }
}

impl Toolkit for FakeToolkit {
    fn download_tool(&self, url: &str, file_name: Option<&str>) -> Result<PathBuf> {
        self.calls.borrow_mut().push(ToolkitCall::Download {
            url: url.to_string(),
            file_name: file_name.map(str::to_string),
        });
        if let Some(message) = &self.download_error {
            return Err(tool::download_failed(url, message));
        }
        Ok(self.download_dir.join(file_name.unwrap_or("download")))
    }

    fn extract_zip(&self, archive: &Path) -> Result<PathBuf> {
        self.calls
            .borrow_mut()
            .push(ToolkitCall::ExtractZip(archive.to_path_buf()));
        Ok(self.extract_dir.clone())
    }

    fn prepend_path(&self, dir: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(ToolkitCall::PrependPath(dir.to_path_buf()));
        Ok(())
    }

    fn mkdir_p(&self, dir: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(ToolkitCall::MkdirP(dir.to_path_buf()));
        Ok(())
    }

    fn mv(&self, from: &Path, to: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(ToolkitCall::Mv(from.to_path_buf(), to.to_path_buf()));
        Ok(())
    }
}

/// Matcher that returns a fixed list of files
#[derive(Default)]
pub struct FakeMatcher {
    pub files: Vec<PathBuf>,
    pub error: Option<String>,
    pub calls: RefCell<Vec<(PathBuf, String)>>,
}

impl FakeMatcher {
    pub fn returning(files: &[&str]) -> Self {
        Self {
            files: files.iter().map(PathBuf::from).collect(),
            ..Self::default()
        }
    }

    pub fn failing_with(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::default()
        }
    }
}

impl FileMatcher for FakeMatcher {
    fn find_match(&self, base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        self.calls
            .borrow_mut()
            .push((base.to_path_buf(), pattern.to_string()));
        match &self.error {
            Some(message) => Err(fs::io_error(message.as_str())),
            None => Ok(self.files.clone()),
        }
    }
}

/// One recorded report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Result {
        result: TaskResult,
        message: String,
        done: bool,
    },
    Warning(String),
    Debug(String),
}

/// Reporter that keeps everything it is told
#[derive(Default)]
pub struct RecordingReporter {
    pub reports: RefCell<Vec<Report>>,
}

impl RecordingReporter {
    pub fn results(&self) -> Vec<(TaskResult, String, bool)> {
        self.reports
            .borrow()
            .iter()
            .filter_map(|report| match report {
                Report::Result {
                    result,
                    message,
                    done,
                } => Some((*result, message.clone(), *done)),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.reports
            .borrow()
            .iter()
            .filter_map(|report| match report {
                Report::Warning(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn debugs(&self) -> Vec<String> {
        self.reports
            .borrow()
            .iter()
            .filter_map(|report| match report {
                Report::Debug(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn set_result(&self, result: TaskResult, message: &str, done: bool) {
        self.reports.borrow_mut().push(Report::Result {
            result,
            message: message.to_string(),
            done,
        });
    }

    fn warning(&self, message: &str) {
        self.reports
            .borrow_mut()
            .push(Report::Warning(message.to_string()));
    }

    fn debug(&self, message: &str) {
        self.reports
            .borrow_mut()
            .push(Report::Debug(message.to_string()));
    }
}

/// A full set of fakes, ready to lend out as a [`TaskContext`]
pub struct Fakes {
    pub host: FakeHost,
    pub inputs: MapInputs,
    pub files: FakeMatcher,
    pub runner: FakeRunner,
    pub toolkit: FakeToolkit,
    pub reporter: RecordingReporter,
}

impl Fakes {
    pub fn new(host: FakeHost) -> Self {
        Self {
            host,
            inputs: MapInputs::new(),
            files: FakeMatcher::default(),
            runner: FakeRunner::new(),
            toolkit: FakeToolkit::new(),
            reporter: RecordingReporter::default(),
        }
    }

    pub fn context(&self) -> TaskContext<'_> {
        TaskContext {
            host: &self.host,
            inputs: &self.inputs,
            files: &self.files,
            runner: &self.runner,
            toolkit: &self.toolkit,
            reporter: &self.reporter,
        }
    }
}

/// An error whose message is empty
#[derive(Debug)]
pub struct SilentError;

impl std::fmt::Display for SilentError {
    fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl std::error::Error for SilentError {}

