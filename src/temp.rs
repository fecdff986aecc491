//! Agent temp directory resolution
//!
//! Downloads and extracted archives go to the pipeline's `Agent.TempDirectory`.
//! Outside a pipeline the system temp directory is used instead, and it is
//! never relative, so nothing is ever unpacked under the working directory
//! (e.g. when TMPDIR=tmp or TMPDIR=./tmp).

use std::env;
use std::path::PathBuf;

use crate::host::Host;

/// Pipeline variable naming the agent's scratch directory
pub const AGENT_TEMP_DIRECTORY: &str = "Agent.TempDirectory";

/// Returns an absolute directory suitable for temporary files.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// The agent temp directory, falling back to [`temp_dir_base`]
pub fn agent_temp_dir(host: &dyn Host) -> PathBuf {
    host.get_variable(AGENT_TEMP_DIRECTORY)
        .map(PathBuf::from)
        .unwrap_or_else(temp_dir_base)
}
