//! Environment probes and process execution against the real agent

use std::env;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::rc::Rc;

use normpath::PathExt;

use super::{ExecOptions, Host, ProcessRunner, SearchPath, ToolCommand};
use crate::error::{Result, tool};
use crate::platform;

/// Environment variable holding a pipeline variable (`Agent.TempDirectory` -> `AGENT_TEMPDIRECTORY`)
pub fn variable_env_name(name: &str) -> String {
    name.replace(['.', ' '], "_").to_uppercase()
}

/// Probes backed by the process environment
pub struct SystemHost {
    search_path: Rc<SearchPath>,
}

impl SystemHost {
    pub fn new(search_path: Rc<SearchPath>) -> Self {
        Self { search_path }
    }
}

impl Host for SystemHost {
    fn os_type(&self) -> String {
        platform::agent_os_type()
    }

    fn os_arch(&self) -> String {
        platform::agent_arch()
    }

    fn which(&self, tool_name: &str, required: bool) -> Result<Option<PathBuf>> {
        let found = which::which_in(tool_name, Some(self.search_path.value()?), self.cwd()?);
        match found {
            Ok(path) => {
                tracing::debug!("{} resolved to {}", tool_name, path.display());
                Ok(Some(path))
            }
            Err(_) if required => Err(tool::not_found(tool_name)),
            Err(e) => {
                tracing::debug!("{} not found on PATH: {}", tool_name, e);
                Ok(None)
            }
        }
    }

    fn cwd(&self) -> Result<PathBuf> {
        let cwd = env::current_dir()?;
        Ok(cwd.normalize()?.into_path_buf())
    }

    fn get_variable(&self, name: &str) -> Option<String> {
        env::var(variable_env_name(name))
            .ok()
            .filter(|value| !value.trim().is_empty())
    }
}

/// Runs tools with `std::process`, resolving them through the shared search path
pub struct SystemRunner {
    search_path: Rc<SearchPath>,
}

impl SystemRunner {
    pub fn new(search_path: Rc<SearchPath>) -> Self {
        Self { search_path }
    }
}

impl ProcessRunner for SystemRunner {
    fn exec(&self, command: &ToolCommand, options: &ExecOptions) -> Result<i32> {
        let path_value = self.search_path.value()?;
        let program = which::which_in(&command.tool, Some(&path_value), env::current_dir()?)
            .map_err(|_| tool::not_found(&command.tool))?;

        if !options.silent {
            println!("[command]{} {}", program.display(), command.args.join(" "));
        }
        tracing::debug!("Running {}", command);

        let mut process = Command::new(&program);
        process.args(&command.args).env("PATH", &path_value);
        if options.silent {
            process.stdout(Stdio::null());
        }

        let status = process
            .status()
            .map_err(|e| tool::exec_failed(&command.tool, e))?;
        let code = status
            .code()
            .ok_or_else(|| tool::exec_failed(&command.tool, "terminated by signal"))?;

        tracing::debug!("{} exited with code {}", command.tool, code);
        if code != 0 && !options.ignore_return_code {
            return Err(tool::exit_code(&command.tool, code));
        }
        Ok(code)
    }
}
