//! Task result reporting through agent logging commands
//!
//! The agent scans a task's stdout for `##vso[...]` lines; these set the task
//! result, raise warnings and update the PATH of later steps.

use std::cell::Cell;

use super::{Reporter, TaskResult};

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%AZP25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(';', "%3B").replace(']', "%5D")
}

/// Format a `##vso[name key=value;...]message` logging command
pub fn logging_command(name: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut command = format!("##vso[{name}");
    if !properties.is_empty() {
        command.push(' ');
        for (key, value) in properties {
            command.push_str(&format!("{key}={};", escape_property(value)));
        }
    }
    command.push(']');
    command.push_str(&escape_data(message));
    command
}

/// Reporter for a pipeline agent (or a terminal)
pub struct PipelineReporter {
    debug_enabled: bool,
    failed: Cell<bool>,
}

impl PipelineReporter {
    /// `debug_enabled` mirrors the `System.Debug` pipeline variable
    pub fn new(debug_enabled: bool) -> Self {
        Self {
            debug_enabled,
            failed: Cell::new(false),
        }
    }

    /// Whether a failed result has been reported
    pub fn failed(&self) -> bool {
        self.failed.get()
    }
}

impl Reporter for PipelineReporter {
    fn set_result(&self, result: TaskResult, message: &str, done: bool) {
        if result == TaskResult::Failed {
            self.failed.set(true);
            tracing::error!("{}", message);
        } else {
            tracing::info!("{}", message);
        }

        let mut properties = vec![("result", result.as_str())];
        if done {
            properties.push(("done", "true"));
        }
        println!("{}", logging_command("task.complete", &properties, message));
    }

    fn warning(&self, message: &str) {
        tracing::warn!("{}", message);
        println!(
            "{}",
            logging_command("task.logissue", &[("type", "warning")], message)
        );
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
        if self.debug_enabled {
            for line in message.lines() {
                println!("##[debug]{line}");
            }
        }
    }
}
