// src/constants.rs

/// The name of the binary and of the root command in usage output.
pub const APP_NAME: &str = "spotctl";

/// The directory under the user's config dir holding spotctl settings.
pub const CONFIG_DIR_NAME: &str = "spotctl";

/// The name of the optional settings file (inside the config dir).
pub const CONFIG_FILENAME: &str = "config.toml";

/// Token that stops the walk and renders usage for the current subtree.
pub const HELP_FLAG: &str = "--help";

/// Token that stops the walk and renders examples for the current subtree.
pub const EXAMPLES_FLAG: &str = "--examples";

/// Environment variable selecting the console verbosity.
pub const LOG_LEVEL_ENV: &str = "LOGLEVEL";

/// Environment variable that disables colored output when set.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Overrides the platform config dir on every OS.
pub const XDG_CONFIG_HOME_ENV: &str = "XDG_CONFIG_HOME";

/// Exit status for help, examples and every dispatch failure.
pub const EXIT_FAILURE: i32 = 1;

/// Tracks in a mixtape when `length` is not given.
pub const DEFAULT_MIXTAPE_LENGTH: i64 = 10;
/// Smallest accepted mixtape `length`.
pub const MIN_MIXTAPE_LENGTH: i64 = 1;
/// Largest accepted mixtape `length`.
pub const MAX_MIXTAPE_LENGTH: i64 = 50;
