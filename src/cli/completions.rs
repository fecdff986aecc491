use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    shellcheck-tasks completions bash > ~/.bash_completion.d/shellcheck-tasks\n\n\
                  Generate zsh completions:\n    shellcheck-tasks completions zsh > ~/.zfunc/_shellcheck-tasks\n\n\
                  Generate fish completions:\n    shellcheck-tasks completions fish > ~/.config/fish/completions/shellcheck-tasks.fish\n\n\
                  Generate PowerShell completions:\n    shellcheck-tasks completions powershell")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
