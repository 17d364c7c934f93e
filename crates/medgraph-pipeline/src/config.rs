//! Configuration loading for the pipeline binary.
//! Reads medgraph.toml from the current directory or the path in the
//! MEDGRAPH_CONFIG env var; individual directories can be overridden via
//! MEDGRAPH_DATA_DIR, MEDGRAPH_INTER_DIR and MEDGRAPH_PROCESSED_DIR.

use std::path::{Path, PathBuf};

use medgraph_common::{MedgraphError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the raw input files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory for per-stage intermediary artifacts.
    #[serde(default = "default_intermediary_dir")]
    pub intermediary_dir: PathBuf,
    /// Directory for the final graph document.
    #[serde(default = "default_processed_dir")]
    pub processed_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("include")
}
fn default_intermediary_dir() -> PathBuf {
    PathBuf::from("data/intermediary")
}
fn default_processed_dir() -> PathBuf {
    PathBuf::from("data/processed")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            intermediary_dir: default_intermediary_dir(),
            processed_dir: default_processed_dir(),
        }
    }
}

impl Config {
    /// Load the configuration file, falling back to defaults when it does
    /// not exist, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path =
            std::env::var("MEDGRAPH_CONFIG").unwrap_or_else(|_| "medgraph.toml".to_string());
        let mut config = if Path::new(&path).exists() {
            let text = std::fs::read_to_string(&path)?;
            toml::from_str(&text).map_err(|e| MedgraphError::Config(e.to_string()))?
        } else {
            Config::default()
        };

        if let Ok(dir) = std::env::var("MEDGRAPH_DATA_DIR") {
            config.paths.data_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("MEDGRAPH_INTER_DIR") {
            config.paths.intermediary_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("MEDGRAPH_PROCESSED_DIR") {
            config.paths.processed_dir = PathBuf::from(dir);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.paths.data_dir, PathBuf::from("include"));
        assert_eq!(config.paths.intermediary_dir, PathBuf::from("data/intermediary"));
        assert_eq!(config.paths.processed_dir, PathBuf::from("data/processed"));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("[paths]\ndata_dir = \"/tmp/raw\"\n").unwrap();
        assert_eq!(config.paths.data_dir, PathBuf::from("/tmp/raw"));
        assert_eq!(config.paths.processed_dir, PathBuf::from("data/processed"));
    }
}
