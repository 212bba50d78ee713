use std::fs;
use std::path::Path;

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

/// Runtime settings, read from an optional JSON file and overridden by CLI flags.
///
/// ```json
/// { "rng_seed": 42, "announce_invalid_input": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed seed for secret generation; OS entropy when absent.
    pub rng_seed: Option<u64>,
    /// Explain rejected input before re-prompting.
    pub announce_invalid_input: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            announce_invalid_input: true,
        }
    }
}

impl GameConfig {
    /// Apply command-line values on top of file values.
    ///
    /// A seed given on the command line replaces the file's seed, and
    /// `quiet_errors` can only turn messages off.
    pub fn with_overrides(mut self, seed: Option<u64>, quiet_errors: bool) -> Self {
        if seed.is_some() {
            self.rng_seed = seed;
        }
        if quiet_errors {
            self.announce_invalid_input = false;
        }
        self
    }
}

#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display("cannot read config file: {_0}")]
    Io(#[error(source)] std::io::Error),
    #[display("invalid config file: {_0}")]
    Json(#[error(source)] serde_json::Error),
}

/// Load settings from `path`. Missing keys take their defaults.
pub fn load_config(path: &Path) -> Result<GameConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<GameConfig, ConfigError> {
    Ok(serde_json::from_str(contents)?)
}
