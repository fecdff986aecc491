//! Platform errors

use super::TaskError;

/// Creates an unsupported operating system error
pub fn unsupported_os(name: impl Into<String>) -> TaskError {
    TaskError::UnsupportedOperatingSystem { name: name.into() }
}

/// Creates an unsupported architecture error
pub fn unsupported_arch(arch: impl Into<String>) -> TaskError {
    TaskError::UnsupportedArchitecture { arch: arch.into() }
}
