// src/bin/spotctl.rs

use spotctl::{
    cli::{Cli, describe_error, registry},
    constants::EXIT_FAILURE,
    core::{
        config::Settings,
        console::{self, Console},
        dispatcher::{self, Outcome},
    },
    t,
};

/// Sets up settings, colors and logging, then routes the arguments through the
/// command tree. Every failure ends here with a red `Error:` line and exit 1.
fn main() {
    let cli = Cli::from_env();

    let (settings, config_warning) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default().with_env_overrides(), Some(e)),
    };
    settings.apply_color();

    let console = Console::new(settings.verbosity);
    if let Err(e) = console::init_logging(settings.verbosity) {
        console.warn(&format!(t!("cli.warning.logger"), error = e));
    }
    if let Some(e) = config_warning {
        console.warn(&format!(t!("cli.warning.config"), error = e));
    }
    log::debug!("CLI args parsed: {:?}", cli);

    let tree = registry::build_command_tree(console);
    if let Err(e) = tree.validate() {
        console.fatal(&format!(t!("cli.error.invalid_tree"), error = e));
    }

    match dispatcher::dispatch(&tree, &cli.tokens) {
        Ok(Outcome::Handled(bindings)) => {
            log::debug!("Handled with bindings: {:?}", bindings);
        }
        Ok(Outcome::Usage(text)) => {
            console.log(text.trim_end());
            std::process::exit(EXIT_FAILURE);
        }
        Ok(Outcome::Examples(text)) => {
            if text.is_empty() {
                console.log(t!("examples.none"));
            } else {
                console.log(text.trim_end());
            }
            std::process::exit(EXIT_FAILURE);
        }
        Err(e) => console.fatal(&describe_error(&e)),
    }
}
