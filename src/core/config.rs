// src/core/config.rs

//! # Settings
//!
//! Optional user settings read from `config.toml` in the spotctl config
//! directory. A missing file means defaults. Environment variables are
//! applied on top of whatever the file says:
//!
//! - `LOGLEVEL` selects the verbosity (`silent`, `normal`, `verbose`, `debug`, `extreme`).
//! - `NO_COLOR`, when set, forces colors off.

use crate::{
    constants::{CONFIG_DIR_NAME, CONFIG_FILENAME, LOG_LEVEL_ENV, NO_COLOR_ENV, XDG_CONFIG_HOME_ENV},
    core::console::Verbosity,
};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Failures locating or reading the settings file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither `XDG_CONFIG_HOME` nor a platform config dir is available.
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    /// The file exists but could not be read.
    #[error("Could not read '{path}': {source}")]
    Read {
        /// The settings file.
        path: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid settings TOML.
    #[error("Could not parse '{path}': {source}")]
    Parse {
        /// The settings file.
        path: String,
        /// The TOML error, with its location.
        #[source]
        source: toml::de::Error,
    },
}

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Let `colored` decide from the terminal.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

/// User settings. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// How much is written to stderr.
    pub verbosity: Verbosity,
    /// Whether output is colored.
    pub color: ColorChoice,
}

/// Returns the spotctl config directory: `$XDG_CONFIG_HOME/spotctl` when set,
/// otherwise the platform config dir.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base = match env::var_os(XDG_CONFIG_HOME_ENV) {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?,
    };
    Ok(base.join(CONFIG_DIR_NAME))
}

impl Settings {
    /// Loads the settings file from the config dir and applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_dir()?.join(CONFIG_FILENAME);
        Ok(Self::load_from(&path)?.with_env_overrides())
    }

    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Applies `LOGLEVEL` and `NO_COLOR` on top of these settings.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            env::var(LOG_LEVEL_ENV).ok().as_deref(),
            env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()),
        )
    }

    /// An unrecognized level leaves the configured one in place.
    fn with_overrides(mut self, log_level: Option<&str>, no_color: bool) -> Self {
        if let Some(level) = log_level.and_then(|l| l.parse::<Verbosity>().ok()) {
            self.verbosity = level;
        }
        if no_color {
            self.color = ColorChoice::Never;
        }
        self
    }

    /// Forces `colored` on or off unless left on auto.
    pub fn apply_color(&self) {
        match self.color {
            ColorChoice::Auto => {}
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}
