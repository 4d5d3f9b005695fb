//! Service list configuration.
//!
//! The config file is a YAML document with a single `services:` list of
//! address strings. Candidate paths are tried in order until one loads;
//! the caller owns the candidate list, nothing here consults the
//! environment.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors surfaced while reading or parsing a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("could not find valid config file, tried: {tried:?}")]
    NotFound { tried: Vec<PathBuf> },
}

/// On-disk configuration: the service addresses to check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub services: Vec<String>,
}

impl Config {
    /// Load from a single YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Try an ordered candidate list; the first path that loads wins.
    /// Returns the config together with the path it came from.
    pub fn load_first(candidates: &[PathBuf]) -> Result<(Self, PathBuf), ConfigError> {
        for path in candidates {
            match Self::load(path) {
                Ok(config) => {
                    debug!(path = %path.display(), "config loaded");
                    return Ok((config, path.clone()));
                }
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "config candidate skipped");
                }
            }
        }
        Err(ConfigError::NotFound {
            tried: candidates.to_vec(),
        })
    }
}
