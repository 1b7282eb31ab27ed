//! Game configuration
//!
//! Settings are read from a TOML file, by default `~/.wordle/config.toml`:
//!
//! ```toml
//! # Guesses allowed per game
//! max_guesses = 6
//!
//! # Word list file (plain text or {"words": [...]} JSON); embedded list if unset
//! wordlist = "static/words.json"
//!
//! # Seed for answer draws, for reproducible games
//! seed = 42
//!
//! # How long transient messages stay on screen in the full-screen game
//! alert_millis = 1000
//! ```
//!
//! Missing keys fall back to their defaults. Command-line flags override
//! whatever the file says.

use crate::game::{DEFAULT_MAX_GUESSES, GameError, GameRules};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const CONFIG_DIR: &str = ".wordle";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "wordle.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid game rules: {0}")]
    Rules(#[from] GameError),
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_guesses: usize,
    pub wordlist: Option<PathBuf>,
    pub seed: Option<u64>,
    pub alert_millis: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            wordlist: None,
            seed: None,
            alert_millis: 1000,
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// if a file is there, otherwise defaults apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the chosen file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the text is malformed or has wrongly typed keys.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Validated game rules
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Rules` if `max_guesses` is zero.
    pub fn rules(&self) -> Result<GameRules, ConfigError> {
        Ok(GameRules::new(self.max_guesses)?)
    }

    #[must_use]
    pub const fn alert_duration(&self) -> Duration {
        Duration::from_millis(self.alert_millis)
    }
}

/// Directory holding the config and log files
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    home_dir().map(|home| home.join(CONFIG_DIR))
}

#[must_use]
pub fn default_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Log file used while the full-screen game owns the terminal
#[must_use]
pub fn log_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOG_FILE))
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
