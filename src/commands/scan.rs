//! Scan command implementation

use std::path::Path;

use super::helpers::{Agent, layer_inputs};
use crate::cli::ScanArgs;
use crate::error::Result;
use crate::task::{self, scan::MissingBinary};

/// Run the scan task against the real agent. Returns whether it succeeded.
pub fn run(inputs_file: Option<&Path>, verbose: bool, args: &ScanArgs) -> Result<bool> {
    let inputs = layer_inputs(args.to_inputs(), inputs_file, ScanArgs::defaults())?;
    let missing = if args.install_missing {
        MissingBinary::Install
    } else {
        MissingBinary::Fail
    };

    let agent = Agent::new(verbose);
    task::scan::run(&agent.context(&inputs), missing);
    Ok(!agent.failed())
}
