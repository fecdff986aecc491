//! Collaborators handed to a task run

use crate::host::{FileMatcher, Host, InputSource, ProcessRunner, Reporter, Toolkit};

/// Everything a task touches outside its own logic
///
/// Tasks never read process globals directly; the command layer builds a
/// context from the `System*` implementations and tests build one from fakes.
#[derive(Clone, Copy)]
pub struct TaskContext<'a> {
    pub host: &'a dyn Host,
    pub inputs: &'a dyn InputSource,
    pub files: &'a dyn FileMatcher,
    pub runner: &'a dyn ProcessRunner,
    pub toolkit: &'a dyn Toolkit,
    pub reporter: &'a dyn Reporter,
}
