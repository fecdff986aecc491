//! Task input errors

use super::TaskError;

/// Creates an input required error
pub fn required(name: impl Into<String>) -> TaskError {
    TaskError::InputRequired { name: name.into() }
}

/// Creates an invalid boolean input error
pub fn invalid_boolean(name: impl Into<String>, value: impl Into<String>) -> TaskError {
    TaskError::InvalidBooleanInput {
        name: name.into(),
        value: value.into(),
    }
}

/// Creates an invalid version error, listing the accepted tokens
pub fn invalid_version(token: impl Into<String>, allowed: &[&str]) -> TaskError {
    TaskError::InvalidVersion {
        token: token.into(),
        allowed: allowed.join(", "),
    }
}

/// Creates an invalid output format error
pub fn invalid_output_format(value: impl Into<String>, allowed: &[&str]) -> TaskError {
    TaskError::InvalidOutputFormat {
        value: value.into(),
        allowed: allowed.join(", "),
    }
}

/// Creates an invalid shell dialect error
pub fn invalid_shell_dialect(value: impl Into<String>, allowed: &[&str]) -> TaskError {
    TaskError::InvalidShellDialect {
        value: value.into(),
        allowed: allowed.join(", "),
    }
}

/// Creates an invalid file pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> TaskError {
    TaskError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
