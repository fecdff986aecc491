//! Inputs file errors

use super::TaskError;

/// Creates an inputs file read error
pub fn read_failed(path: impl Into<String>, reason: impl ToString) -> TaskError {
    TaskError::ConfigReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates an inputs file parse error
pub fn parse_failed(path: impl Into<String>, reason: impl ToString) -> TaskError {
    TaskError::ConfigParseFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}
