// src/cli/mod.rs

use crate::{constants::APP_NAME, core::dispatcher::DispatchError};
use clap::Parser;
use colored::Colorize;
use std::ffi::OsString;

/// Handler bodies for the bundled commands.
pub mod handlers;
/// The bundled command tree.
pub mod registry;

/// spotctl: control spotify from the command line.
///
/// Every argument is handed verbatim to the command tree; run
/// `spotctl --help` for the full command list and `spotctl --examples`
/// for sample invocations.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
// Help and examples are rendered from the command tree, not by clap.
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// The tokens to route through the command tree.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

impl Cli {
    /// Parses `args` (program name first) so that every token after the
    /// program name reaches the tree unchanged, a leading `--` included.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let program = args.next().unwrap_or_else(|| OsString::from(APP_NAME));
        // clap swallows the first `--` it sees; hand it one of its own.
        let escaped = [program, OsString::from("--")].into_iter().chain(args);
        Self::try_parse_from(escaped)
    }

    /// Parses the process arguments, exiting through clap on failure.
    pub fn from_env() -> Self {
        Self::try_from_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }
}

/// The message printed for a failed dispatch. An unknown command also gets
/// a hint pointing at `--help`.
pub fn describe_error(error: &DispatchError) -> String {
    if error.is_command_not_found() {
        format!(
            "{}\n{}: {}",
            error,
            t!("label.hint").yellow(),
            format!(t!("cli.hint.help"), program = APP_NAME)
        )
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        console::{Console, Verbosity},
        dispatcher::dispatch,
    };

    #[test]
    fn test_tokens_are_captured_verbatim() {
        let cli = Cli::try_from_args(["spotctl", "mixtape", "a=chavez", "n=20"]).unwrap();
        assert_eq!(cli.tokens, vec!["mixtape", "a=chavez", "n=20"]);
    }

    #[test]
    fn test_help_and_examples_flags_reach_the_tree() {
        let cli = Cli::try_from_args(["spotctl", "--help"]).unwrap();
        assert_eq!(cli.tokens, vec!["--help"]);

        let cli = Cli::try_from_args(["spotctl", "show", "--examples"]).unwrap();
        assert_eq!(cli.tokens, vec!["show", "--examples"]);
    }

    #[test]
    fn test_no_tokens() {
        let cli = Cli::try_from_args(["spotctl"]).unwrap();
        assert!(cli.tokens.is_empty());
    }

    #[test]
    fn test_leading_double_dash_is_kept() {
        let cli = Cli::try_from_args(["spotctl", "--", "--help"]).unwrap();
        assert_eq!(cli.tokens, vec!["--", "--help"]);

        let cli = Cli::try_from_args(["spotctl", "--"]).unwrap();
        assert_eq!(cli.tokens, vec!["--"]);

        let cli = Cli::try_from_args(["spotctl", "mixtape", "--", "a=x"]).unwrap();
        assert_eq!(cli.tokens, vec!["mixtape", "--", "a=x"]);
    }

    #[test]
    fn test_leading_double_dash_is_an_unknown_command() {
        let cli = Cli::try_from_args(["spotctl", "--", "--help"]).unwrap();
        let tree = registry::build_command_tree(Console::new(Verbosity::Silent));
        let err = dispatch(&tree, &cli.tokens).unwrap_err();
        assert!(matches!(err, DispatchError::CommandNotFound { ref token } if token == "--"));
    }

    #[test]
    fn test_unknown_command_message_carries_help_hint() {
        colored::control::set_override(false);
        let err = DispatchError::CommandNotFound {
            token: "bogus".to_string(),
        };
        assert_eq!(
            describe_error(&err),
            "command not found\nHint: run `spotctl --help` to list the available commands"
        );

        let err = DispatchError::UnknownParams {
            command: "mixtape".to_string(),
            remaining: vec!["foo=1".to_string()],
        };
        assert_eq!(describe_error(&err), "unknown params remaining: foo=1");
    }
}
