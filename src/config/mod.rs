//! Relay Configuration System
//!
//! Settings come from up to three YAML files, read in this order of
//! precedence:
//! 1. `./ndp-relay.yaml` (current directory - highest priority)
//! 2. `~/.config/ndp-relay/ndp-relay.yaml` (user config directory)
//! 3. `/etc/ndp-relay/ndp-relay.yaml` (system - lowest priority)
//!
//! A key set in a higher file wins; keys it leaves out fall through.
//!
//! # YAML Structure
//!
//! ```yaml
//! relay:
//!   max_peers_per_session: 32
//!   inbound_queue_depth: 64
//!   initiator_post_failure: log
//! ```

mod relay;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use relay::{InitiatorPostFailure, RelayConfig};

/// Default config filename.
const CONFIG_FILENAME: &str = "ndp-relay.yaml";

/// Config directory name under system and user config roots.
const CONFIG_DIRNAME: &str = "ndp-relay";

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseYaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// A `relay:` section as written in a file, where every key is optional
/// so that merging can tell "unset" from "set to the default".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RelayOverrides {
    #[serde(default)]
    max_peers_per_session: Option<u16>,
    #[serde(default)]
    inbound_queue_depth: Option<usize>,
    #[serde(default)]
    controller_queue_depth: Option<usize>,
    #[serde(default)]
    radio_queue_depth: Option<usize>,
    #[serde(default)]
    initiator_post_failure: Option<InitiatorPostFailure>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    relay: RelayOverrides,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Relay configuration (`relay.*`).
    #[serde(default)]
    pub relay: RelayConfig,
}

impl Config {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from [`Config::search_paths`], returning the files actually read.
    pub fn load() -> Result<(Self, Vec<PathBuf>), ConfigError> {
        let search_paths = Self::search_paths();
        Self::load_from_paths(&search_paths)
    }

    /// Load from `paths`, later files overriding earlier ones. Missing files
    /// are skipped.
    pub fn load_from_paths(paths: &[PathBuf]) -> Result<(Self, Vec<PathBuf>), ConfigError> {
        let mut config = Config::default();
        let mut loaded_paths = Vec::new();

        for path in paths {
            if path.exists() {
                let file = Self::read_overrides(path)?;
                config.apply(file.relay);
                loaded_paths.push(path.clone());
            }
        }

        Ok((config, loaded_paths))
    }

    /// Load one file on top of the defaults.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply(Self::read_overrides(path)?.relay);
        Ok(config)
    }

    fn read_overrides(path: &Path) -> Result<ConfigFile, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        // An empty file parses as YAML null; treat it as "no overrides".
        if contents.trim().is_empty() {
            return Ok(ConfigFile::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| ConfigError::ParseYaml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Search paths, lowest precedence first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        paths.push(PathBuf::from("/etc").join(CONFIG_DIRNAME).join(CONFIG_FILENAME));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(CONFIG_DIRNAME).join(CONFIG_FILENAME));
        }

        paths.push(PathBuf::from(".").join(CONFIG_FILENAME));

        paths
    }

    /// Fold `other` into `self`; only values that differ from the defaults
    /// are taken.
    pub fn merge(&mut self, other: Config) {
        let defaults = RelayConfig::default();
        let other = other.relay;
        if other.max_peers_per_session != defaults.max_peers_per_session {
            self.relay.max_peers_per_session = other.max_peers_per_session;
        }
        if other.inbound_queue_depth != defaults.inbound_queue_depth {
            self.relay.inbound_queue_depth = other.inbound_queue_depth;
        }
        if other.controller_queue_depth != defaults.controller_queue_depth {
            self.relay.controller_queue_depth = other.controller_queue_depth;
        }
        if other.radio_queue_depth != defaults.radio_queue_depth {
            self.relay.radio_queue_depth = other.radio_queue_depth;
        }
        if other.initiator_post_failure != defaults.initiator_post_failure {
            self.relay.initiator_post_failure = other.initiator_post_failure;
        }
    }

    fn apply(&mut self, overrides: RelayOverrides) {
        if let Some(v) = overrides.max_peers_per_session {
            self.relay.max_peers_per_session = v;
        }
        if let Some(v) = overrides.inbound_queue_depth {
            self.relay.inbound_queue_depth = v;
        }
        if let Some(v) = overrides.controller_queue_depth {
            self.relay.controller_queue_depth = v;
        }
        if let Some(v) = overrides.radio_queue_depth {
            self.relay.radio_queue_depth = v;
        }
        if let Some(v) = overrides.initiator_post_failure {
            self.relay.initiator_post_failure = v;
        }
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
