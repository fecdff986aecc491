//! Install command implementation

use std::path::Path;

use super::helpers::{Agent, layer_inputs};
use crate::cli::InstallArgs;
use crate::error::Result;
use crate::task;

/// Run the install task against the real agent. Returns whether it succeeded.
pub fn run(inputs_file: Option<&Path>, verbose: bool, args: &InstallArgs) -> Result<bool> {
    let inputs = layer_inputs(args.to_inputs(), inputs_file, InstallArgs::defaults())?;
    let agent = Agent::new(verbose);
    task::install::run(&agent.context(&inputs));
    Ok(!agent.failed())
}
