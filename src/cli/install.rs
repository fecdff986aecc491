use clap::Parser;

use crate::host::MapInputs;
use crate::task::install::VERSION_INPUT;

/// Arguments for the install command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Install the latest release:\n    shellcheck-tasks install\n\n\
                  Install a specific release:\n    shellcheck-tasks install --version 0.6.0\n\n\
                  Install from the pipeline input:\n    INPUT_VERSION=stable shellcheck-tasks install")]
pub struct InstallArgs {
    /// Release to install (latest, stable, 0.6.0, 0.5.0, 0.4.7, 0.4.6)
    #[arg(long, env = "INPUT_VERSION")]
    pub version: Option<String>,
}

impl InstallArgs {
    /// Default when neither the command line nor the inputs file names a version
    pub const DEFAULT_VERSION: &'static str = "latest";

    /// Inputs given on the command line or through the environment
    pub fn to_inputs(&self) -> MapInputs {
        let mut inputs = MapInputs::new();
        inputs.insert_opt(VERSION_INPUT, self.version.clone());
        inputs
    }

    pub fn defaults() -> MapInputs {
        MapInputs::new().with(VERSION_INPUT, Self::DEFAULT_VERSION)
    }
}
