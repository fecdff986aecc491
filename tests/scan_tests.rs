//! Scan task tests against a stub ShellCheck

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

const SUCCEEDED: &str = "##vso[task.complete result=Succeeded;done=true;]ShellCheck scan succeeded!";
const FAILED: &str = "##vso[task.complete result=Failed;done=true;]ShellCheck scan failed! Check the logs for violation details.";

fn workspace_with_scripts() -> TestWorkspace {
    let workspace = TestWorkspace::new();
    workspace.write_file("a.sh", "#!/bin/sh\necho $1\n");
    workspace.write_file("b.sh", "#!/bin/sh\necho b\n");
    workspace.write_file("lib/c.sh", "#!/bin/sh\necho c\n");
    workspace.write_file("README.md", "# scripts\n");
    workspace
}

#[test]
fn test_scan_no_files_warns_and_succeeds() {
    let workspace = TestWorkspace::new();
    workspace.write_file("README.md", "# nothing to check\n");

    workspace
        .command()
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "##vso[task.logissue type=warning;]No shell files found for input '**/*.sh'.",
        ))
        .stdout(predicate::str::contains("task.complete").not());
}

#[test]
fn test_scan_no_files_reports_custom_pattern() {
    let workspace = workspace_with_scripts();
    workspace
        .command()
        .args(["scan", "--target-files", "deploy/**/*.bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No shell files found for input 'deploy/**/*.bash'.",
        ));
}

#[test]
fn test_scan_invalid_output_format() {
    let workspace = workspace_with_scripts();
    workspace
        .command()
        .args(["scan", "--output-format", "xml"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "##vso[task.complete result=Failed;done=true;]Invalid OutputFormat: 'xml'. \
             Allowed values are: tty, checkstyle, gcc, json.",
        ));
}

#[test]
fn test_scan_invalid_shell_dialect_from_environment() {
    let workspace = workspace_with_scripts();
    workspace
        .command()
        .arg("scan")
        .env("INPUT_SHELLDIALECT", "zsh")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Invalid ShellDialect: 'zsh'. Allowed values are: default, bash, dash, ksh, sh.",
        ));
}

#[test]
fn test_scan_missing_shellcheck() {
    let workspace = workspace_with_scripts();
    workspace
        .command()
        .arg("scan")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "##vso[task.complete result=Failed;done=true;]ShellCheck executable not found. \
             Add the ShellCheck Installer task to your pipeline, or manually install ShellCheck on your agent",
        ));
}

#[test]
fn test_scan_invalid_boolean_from_environment_is_reported() {
    let workspace = workspace_with_scripts();
    workspace
        .command()
        .arg("scan")
        .env("INPUT_USERCFILES", "maybe")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "##vso[task.complete result=Failed;]Fatal error. Enable debugging to see error details.",
        ));
}

#[cfg(unix)]
mod with_stub {
    use super::*;

    #[test]
    fn test_scan_success() {
        let workspace = workspace_with_scripts();
        workspace.install_stub_shellcheck(0);

        workspace
            .command()
            .arg("scan")
            .assert()
            .success()
            .stdout(predicate::str::contains(SUCCEEDED));

        assert_eq!(
            workspace.read_outside("shellcheck-args.txt"),
            "a.sh\nb.sh\nlib/c.sh\n-f\ntty\n"
        );
    }

    #[test]
    fn test_scan_failure() {
        let workspace = workspace_with_scripts();
        workspace.install_stub_shellcheck(1);

        workspace
            .command()
            .arg("scan")
            .assert()
            .failure()
            .stdout(predicate::str::contains(FAILED))
            .stdout(predicate::str::contains("exit code").not());
    }

    #[test]
    fn test_scan_failure_code_in_debug_output() {
        let workspace = workspace_with_scripts();
        workspace.install_stub_shellcheck(1);

        workspace
            .command()
            .arg("scan")
            .env("SYSTEM_DEBUG", "true")
            .assert()
            .failure()
            .stdout(predicate::str::contains("##[debug]ShellCheck exited with code 1"))
            .stdout(predicate::str::contains(FAILED));
    }

    #[test]
    fn test_scan_shows_analyzer_output() {
        let workspace = workspace_with_scripts();
        workspace.install_stub_shellcheck(1);

        workspace
            .command()
            .arg("scan")
            .assert()
            .failure()
            .stdout(predicate::str::contains("In a.sh line 1: SC2086"));
    }

    #[test]
    fn test_scan_forwards_options() {
        let workspace = workspace_with_scripts();
        workspace.install_stub_shellcheck(0);

        workspace
            .command()
            .args([
                "scan",
                "--target-files",
                "lib/*.sh",
                "--follow-sourced-files",
                "--check-sourced-files",
                "--use-rc-files",
                "false",
                "--ignored-error-codes",
                "SC2059",
                "--ignored-error-codes",
                "SC1090",
                "--output-format",
                "json",
                "--shell-dialect",
                "bash",
            ])
            .assert()
            .success();

        assert_eq!(
            workspace.read_outside("shellcheck-args.txt"),
            "lib/c.sh\n-x\n-a\n--norc\n-e\nSC2059\n-e\nSC1090\n-f\njson\n-s\nbash\n"
        );
    }

    #[test]
    fn test_scan_boolean_environment_inputs_ignore_case() {
        let workspace = workspace_with_scripts();
        workspace.install_stub_shellcheck(0);

        workspace
            .command()
            .arg("scan")
            .env("INPUT_USERCFILES", "True")
            .env("INPUT_FOLLOWSOURCEDFILES", "TRUE")
            .env("INPUT_CHECKSOURCEDFILES", "False")
            .assert()
            .success()
            .stdout(predicate::str::contains(SUCCEEDED));

        assert_eq!(
            workspace.read_outside("shellcheck-args.txt"),
            "a.sh\nb.sh\nlib/c.sh\n-x\n-f\ntty\n"
        );
    }

    #[test]
    fn test_scan_pattern_exclusions() {
        let workspace = workspace_with_scripts();
        workspace.install_stub_shellcheck(0);

        workspace
            .command()
            .arg("scan")
            .env("INPUT_TARGETFILES", "**/*.sh\n# vendored\n!lib/**")
            .assert()
            .success();

        assert_eq!(
            workspace.read_outside("shellcheck-args.txt"),
            "a.sh\nb.sh\n-f\ntty\n"
        );
    }

    #[test]
    fn test_scan_inputs_file_with_command_line_override() {
        let workspace = workspace_with_scripts();
        workspace.install_stub_shellcheck(0);
        let inputs = workspace.outside("inputs.yaml");
        std::fs::write(
            &inputs,
            "targetFiles: a.sh\noutputFormat: gcc\nshellDialect: dash\nignoredErrorCodes:\n  - SC2086\n",
        )
        .unwrap();

        workspace
            .command()
            .arg("--inputs")
            .arg(&inputs)
            .args(["scan", "--output-format", "checkstyle"])
            .assert()
            .success();

        assert_eq!(
            workspace.read_outside("shellcheck-args.txt"),
            "a.sh\n-e\nSC2086\n-f\ncheckstyle\n-s\ndash\n"
        );
    }
}
