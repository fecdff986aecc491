//! File system errors

use std::path::Path;

use super::TaskError;

/// Creates a move failed error
pub fn move_failed(from: &Path, to: &Path, reason: impl ToString) -> TaskError {
    TaskError::MoveFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> TaskError {
    TaskError::IoError {
        message: message.into(),
    }
}
