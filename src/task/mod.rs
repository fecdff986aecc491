//! The two pipeline tasks
//!
//! - [`install`]: resolve the requested version and install ShellCheck
//! - [`scan`]: find scripts, make sure ShellCheck is available, run it
//!
//! Both tasks report through the context's [`Reporter`] and never return an
//! error: input validation failures get their own message, anything else is
//! logged at debug level and collapsed into [`FATAL_ERROR_MESSAGE`].

pub mod install;
pub mod scan;

use crate::error::TaskError;
use crate::host::{Reporter, TaskResult};

/// Shown for any unexpected failure; details go to the debug log only
pub const FATAL_ERROR_MESSAGE: &str = "Fatal error. Enable debugging to see error details.";

/// Message of an error, or `unknown` when it has none
pub fn error_details(err: &dyn std::error::Error) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        "unknown".to_string()
    } else {
        message
    }
}

/// Turn a task error into a reported result
pub(crate) fn report_error(reporter: &dyn Reporter, err: &TaskError) {
    if err.is_input_validation() {
        reporter.set_result(TaskResult::Failed, &err.to_string(), true);
        return;
    }
    reporter.debug(&format!("Error details: {}", error_details(err)));
    reporter.set_result(TaskResult::Failed, FATAL_ERROR_MESSAGE, false);
}
