use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use crate::host::MapInputs;
use crate::task::scan::inputs;

/// Arguments for the scan command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Check every script under the working directory:\n    shellcheck-tasks scan\n\n\
                  Check a subset and follow sourced files:\n    shellcheck-tasks scan --target-files 'scripts/**/*.sh' --follow-sourced-files\n\n\
                  Ignore specific codes:\n    shellcheck-tasks scan --ignored-error-codes SC2059 --ignored-error-codes SC1090\n\n\
                  Install ShellCheck first when it is missing:\n    shellcheck-tasks scan --install-missing")]
pub struct ScanArgs {
    /// Newline separated glob patterns; `!` excludes, `#` comments [default: **/*.sh]
    #[arg(long, env = "INPUT_TARGETFILES", value_name = "PATTERNS")]
    pub target_files: Option<String>,

    /// Follow `source` statements (-x) [default: false]
    #[arg(long, env = "INPUT_FOLLOWSOURCEDFILES", action = ArgAction::Set,
          num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub follow_sourced_files: Option<String>,

    /// Report issues in sourced files too (-a) [default: false]
    #[arg(long, env = "INPUT_CHECKSOURCEDFILES", action = ArgAction::Set,
          num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub check_sourced_files: Option<String>,

    /// Codes to exclude (-e); repeat the option or separate with newlines
    #[arg(long, env = "INPUT_IGNOREDERRORCODES", value_delimiter = '\n', value_name = "CODE")]
    pub ignored_error_codes: Vec<String>,

    /// Output format (tty, checkstyle, gcc, json) [default: tty]
    #[arg(long, env = "INPUT_OUTPUTFORMAT", value_name = "FORMAT")]
    pub output_format: Option<String>,

    /// Shell dialect (default, bash, dash, ksh, sh) [default: default]
    #[arg(long, env = "INPUT_SHELLDIALECT", value_name = "DIALECT")]
    pub shell_dialect: Option<String>,

    /// Read .shellcheckrc files; false passes --norc [default: true]
    #[arg(long, env = "INPUT_USERCFILES", action = ArgAction::Set,
          num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub use_rc_files: Option<String>,

    /// Install the stable release when ShellCheck is not on PATH
    #[arg(long, env = "INPUT_INSTALLMISSING", value_parser = BoolishValueParser::new())]
    pub install_missing: bool,
}

impl ScanArgs {
    /// Inputs given on the command line or through the environment
    pub fn to_inputs(&self) -> MapInputs {
        let mut map = MapInputs::new();
        map.insert_opt(inputs::TARGET_FILES, self.target_files.clone());
        map.insert_opt(
            inputs::FOLLOW_SOURCED_FILES,
            self.follow_sourced_files.clone(),
        );
        map.insert_opt(
            inputs::CHECK_SOURCED_FILES,
            self.check_sourced_files.clone(),
        );
        if !self.ignored_error_codes.is_empty() {
            map.insert(inputs::IGNORED_ERROR_CODES, self.ignored_error_codes.join("\n"));
        }
        map.insert_opt(inputs::OUTPUT_FORMAT, self.output_format.clone());
        map.insert_opt(inputs::SHELL_DIALECT, self.shell_dialect.clone());
        map.insert_opt(inputs::USE_RC_FILES, self.use_rc_files.clone());
        map
    }

    /// Task defaults, the lowest input layer
    pub fn defaults() -> MapInputs {
        MapInputs::new()
            .with(inputs::TARGET_FILES, "**/*.sh")
            .with(inputs::FOLLOW_SOURCED_FILES, "false")
            .with(inputs::CHECK_SOURCED_FILES, "false")
            .with(inputs::OUTPUT_FORMAT, "tty")
            .with(inputs::SHELL_DIALECT, "default")
            .with(inputs::USE_RC_FILES, "true")
    }
}
