//! Command helper utilities
//!
//! Wires the real agent collaborators together and layers task inputs.

use std::path::Path;
use std::rc::Rc;

use crate::context::TaskContext;
use crate::error::Result;
use crate::host::{
    GlobMatcher, Host, InputSource, LayeredInputs, MapInputs, PipelineReporter, SearchPath,
    SystemHost, SystemRunner, SystemToolkit,
};
use crate::temp;

/// Pipeline variable that turns on debug output for a whole run
pub const SYSTEM_DEBUG: &str = "System.Debug";

/// Set by the agent on every pipeline run
pub const TF_BUILD: &str = "TF_BUILD";

/// The real collaborators for one task run
pub struct Agent {
    host: SystemHost,
    files: GlobMatcher,
    runner: SystemRunner,
    toolkit: SystemToolkit,
    reporter: PipelineReporter,
}

impl Agent {
    /// All collaborators share one search path, so a directory prepended by
    /// an install is visible to the probes and the runner that follow.
    pub fn new(verbose: bool) -> Self {
        let search_path = Rc::new(SearchPath::from_env());
        let host = SystemHost::new(Rc::clone(&search_path));
        let debug = verbose
            || host
                .get_variable(SYSTEM_DEBUG)
                .is_some_and(|value| value.eq_ignore_ascii_case("true"));
        let mut toolkit = SystemToolkit::new(temp::agent_temp_dir(&host), Rc::clone(&search_path));
        if host.get_variable(TF_BUILD).is_some() {
            // Progress redraws only clutter pipeline logs
            toolkit = toolkit.quiet();
        }

        Self {
            host,
            files: GlobMatcher,
            runner: SystemRunner::new(search_path),
            toolkit,
            reporter: PipelineReporter::new(debug),
        }
    }

    pub fn context<'a>(&'a self, inputs: &'a dyn InputSource) -> TaskContext<'a> {
        TaskContext {
            host: &self.host,
            inputs,
            files: &self.files,
            runner: &self.runner,
            toolkit: &self.toolkit,
            reporter: &self.reporter,
        }
    }

    /// Whether the task reported a failure
    pub fn failed(&self) -> bool {
        self.reporter.failed()
    }
}

/// Layer inputs: command line and environment, then the inputs file, then defaults
pub fn layer_inputs(
    given: MapInputs,
    inputs_file: Option<&Path>,
    defaults: MapInputs,
) -> Result<LayeredInputs> {
    let mut layered = LayeredInputs::new().layer(given);
    if let Some(path) = inputs_file {
        let from_file = MapInputs::from_yaml_file(path)?;
        if from_file.is_empty() {
            tracing::warn!("Inputs file {} sets no inputs", path.display());
        } else {
            tracing::debug!("Read {} input(s) from {}", from_file.len(), path.display());
        }
        layered = layered.layer(from_file);
    }
    Ok(layered.layer(defaults))
}
