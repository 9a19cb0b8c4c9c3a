// src/core/console.rs

use crate::constants::EXIT_FAILURE;
use colored::Colorize;
use log::LevelFilter;
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// How much the tool says on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Nothing on stderr.
    Silent,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Adds informational logs.
    Verbose,
    /// Adds debug logs.
    Debug,
    /// Everything, including traces.
    Extreme,
}

impl Verbosity {
    /// The `log` filter used for diagnostic output at this verbosity.
    pub fn log_filter(self) -> LevelFilter {
        match self {
            Self::Silent => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Extreme => LevelFilter::Trace,
        }
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            "debug" => Ok(Self::Debug),
            "extreme" => Ok(Self::Extreme),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Silent => "silent",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Extreme => "extreme",
        };
        write!(f, "{}", name)
    }
}

/// Initializes `env_logger` at the filter matching `verbosity`. `RUST_LOG`, when set, wins.
pub fn init_logging(verbosity: Verbosity) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(verbosity.log_filter())
        .format_timestamp(None)
        .format_target(false);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.try_init()
}

/// The user-facing sink: messages on stderr, command output on stdout.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    verbosity: Verbosity,
}

impl Console {
    /// A console writing at `verbosity`.
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// False only when silenced.
    pub fn should_log(&self) -> bool {
        self.verbosity >= Verbosity::Normal
    }

    /// Writes `message` to stderr unless silenced.
    pub fn log(&self, message: &str) {
        if self.should_log() {
            eprintln!("{}", message);
        }
    }

    /// Writes `message` to stderr behind a yellow label unless silenced.
    pub fn warn(&self, message: &str) {
        if self.should_log() {
            eprintln!("{}: {}", t!("label.warning").yellow().bold(), message);
        }
    }

    /// Output meant for other programs. Never silenced.
    pub fn output(&self, message: &str) {
        println!("{}", message);
    }

    /// Logs `message` as an error and terminates with the failure status.
    pub fn fatal(&self, message: &str) -> ! {
        self.log(&format!("\n{}: {}", t!("label.error").red().bold(), message));
        std::process::exit(EXIT_FAILURE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_parses_case_insensitively() {
        assert_eq!("DEBUG".parse::<Verbosity>(), Ok(Verbosity::Debug));
        assert_eq!(" silent ".parse::<Verbosity>(), Ok(Verbosity::Silent));
        assert!("loud".parse::<Verbosity>().is_err());
    }

    #[test]
    fn test_verbosity_maps_to_log_filter() {
        assert_eq!(Verbosity::Silent.log_filter(), LevelFilter::Off);
        assert_eq!(Verbosity::Normal.log_filter(), LevelFilter::Warn);
        assert_eq!(Verbosity::Extreme.log_filter(), LevelFilter::Trace);
    }

    #[test]
    fn test_silent_console_does_not_log() {
        assert!(!Console::new(Verbosity::Silent).should_log());
        assert!(Console::new(Verbosity::Normal).should_log());
        assert!(Console::new(Verbosity::Verbose).should_log());
    }

    #[test]
    fn test_verbosity_display_round_trips() {
        for level in [Verbosity::Silent, Verbosity::Normal, Verbosity::Extreme] {
            assert_eq!(level.to_string().parse::<Verbosity>(), Ok(level));
        }
    }
}
