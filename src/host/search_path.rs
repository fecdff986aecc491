//! Executable search path shared by the probes, the toolkit and the runner
//!
//! Directories prepended during a run are kept here instead of being written
//! back into the process environment, so lookups and spawned tools see them
//! while the rest of the process stays untouched.

use std::cell::RefCell;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Result, fs};

/// `PATH` as seen by this task run
#[derive(Debug, Default)]
pub struct SearchPath {
    base: Option<OsString>,
    prepended: RefCell<Vec<PathBuf>>,
}

impl SearchPath {
    /// Start from an explicit `PATH` value
    pub fn new(base: Option<OsString>) -> Self {
        Self {
            base,
            prepended: RefCell::new(Vec::new()),
        }
    }

    /// Start from the process `PATH`
    pub fn from_env() -> Self {
        Self::new(env::var_os("PATH"))
    }

    /// Put `dir` ahead of everything else, including earlier prepends
    pub fn prepend(&self, dir: &Path) {
        let mut prepended = self.prepended.borrow_mut();
        prepended.retain(|existing| existing != dir);
        prepended.push(dir.to_path_buf());
    }

    /// Directories in lookup order
    pub fn dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = self.prepended.borrow().iter().rev().cloned().collect();
        if let Some(base) = &self.base {
            dirs.extend(env::split_paths(base));
        }
        dirs
    }

    /// The joined value to hand to `which` and child processes
    pub fn value(&self) -> Result<OsString> {
        env::join_paths(self.dirs()).map_err(|e| fs::io_error(format!("Invalid PATH entry: {e}")))
    }
}
