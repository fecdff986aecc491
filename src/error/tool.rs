//! Download, archive and process errors

use super::TaskError;

/// Creates a download failed error
pub fn download_failed(url: impl Into<String>, reason: impl ToString) -> TaskError {
    TaskError::DownloadFailed {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates an archive extraction error
pub fn extract_failed(path: impl Into<String>, reason: impl ToString) -> TaskError {
    TaskError::ExtractFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a process spawn/wait error
pub fn exec_failed(tool: impl Into<String>, reason: impl ToString) -> TaskError {
    TaskError::ProcessExecFailed {
        tool: tool.into(),
        reason: reason.to_string(),
    }
}

/// Creates a nonzero exit code error
pub fn exit_code(tool: impl Into<String>, code: i32) -> TaskError {
    TaskError::ProcessExitCode {
        tool: tool.into(),
        code,
    }
}

/// Creates a tool not found error
pub fn not_found(tool: impl Into<String>) -> TaskError {
    TaskError::ToolNotFound { tool: tool.into() }
}
