//! Command implementations for the shellcheck-tasks CLI

pub mod completions;
pub mod helpers;
pub mod install;
pub mod scan;
pub mod version;
