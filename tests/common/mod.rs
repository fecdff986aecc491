//! Common test utilities for shellcheck-tasks integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Variables the agent exports that would leak into a test run
const AGENT_VARIABLES: &[&str] = &[
    "INPUT_VERSION",
    "INPUT_TARGETFILES",
    "INPUT_FOLLOWSOURCEDFILES",
    "INPUT_CHECKSOURCEDFILES",
    "INPUT_IGNOREDERRORCODES",
    "INPUT_OUTPUTFORMAT",
    "INPUT_SHELLDIALECT",
    "INPUT_USERCFILES",
    "INPUT_INSTALLMISSING",
    "SYSTEM_DEBUG",
    "AGENT_TEMPDIRECTORY",
    "RUST_LOG",
];

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
    /// Directory that stands in for the agent's PATH
    pub bin_dir: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace with an empty `bin` directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("src");
        let bin_dir = temp.path().join("bin");
        std::fs::create_dir_all(&path).expect("Failed to create workspace directory");
        std::fs::create_dir_all(&bin_dir).expect("Failed to create bin directory");
        Self {
            temp,
            path,
            bin_dir,
        }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the temp directory, outside the scanned tree
    #[allow(dead_code)]
    pub fn read_outside(&self, name: &str) -> String {
        std::fs::read_to_string(self.temp.path().join(name)).expect("Failed to read file")
    }

    /// Path in the temp directory, outside the scanned tree
    #[allow(dead_code)]
    pub fn outside(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }

    /// Put a fake `shellcheck` in the bin directory.
    ///
    /// It records its arguments, one per line, in `shellcheck-args.txt` next
    /// to the workspace and exits with `exit_code`.
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn install_stub_shellcheck(&self, exit_code: i32) {
        use std::os::unix::fs::PermissionsExt;

        let args_file = self.outside("shellcheck-args.txt");
        let script = format!(
            "#!/bin/sh\nfor arg in \"$@\"; do echo \"$arg\"; done > '{}'\necho 'In a.sh line 1: SC2086'\nexit {}\n",
            args_file.display(),
            exit_code
        );
        let stub = self.bin_dir.join("shellcheck");
        std::fs::write(&stub, script).expect("Failed to write stub");
        std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make stub executable");
    }

    /// The binary under test, run in the workspace with a clean agent
    /// environment and only the bin directory on PATH
    pub fn command(&self) -> Command {
        let mut cmd = shellcheck_tasks_cmd();
        for name in AGENT_VARIABLES {
            cmd.env_remove(name);
        }
        cmd.current_dir(&self.path)
            .env("PATH", &self.bin_dir)
            .env("AGENT_TEMPDIRECTORY", self.temp.path());
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn shellcheck_tasks_cmd() -> Command {
    Command::cargo_bin("shellcheck-tasks").expect("binary should be built")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
        assert!(workspace.bin_dir.exists());
    }

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("test/file.sh", "echo hello");
        assert!(workspace.path.join("test/file.sh").exists());
    }
}
