//! Configuration System
//!
//! Loads tuning parameters from patches.toml for easy adjustment without
//! recompiling. CLI flags on the runner override the file.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "patches.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub run: RunConfig,
    pub grid: GridConfig,
}

/// Runner parameters
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    pub default_ticks: u64,
    pub snapshot_interval: u64,
    pub seed: u64,
}

/// Lattice parameters
#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    /// Number of distinct opinions, bounded by the palette size
    pub num_opinions: usize,
    /// Probability that a cell applies the polled majority each tick
    pub adopt_probability: f64,
    /// Moore neighborhood radius for opinion polling
    pub radius: usize,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from the given path, or use defaults if that fails
    pub fn load_or_default_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("could not load {}: {}; using defaults", path.display(), e);
            Self::default()
        })
    }

    /// Load configuration from the default path, or use defaults
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(DEFAULT_TUNING_PATH)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            run: RunConfig {
                default_ticks: 100,
                snapshot_interval: 10,
                seed: 42,
            },
            grid: GridConfig {
                width: 20,
                height: 20,
                num_opinions: 16,
                adopt_probability: 1.0,
                radius: 1,
            },
        }
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.run.default_ticks, 100);
        assert_eq!(config.grid.width, 20);
        assert_eq!(config.grid.num_opinions, 16);
        assert_eq!(config.grid.radius, 1);
        assert!(config.grid.adopt_probability >= 0.0 && config.grid.adopt_probability <= 1.0);
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[run]\ndefault_ticks = 5\nsnapshot_interval = 2\nseed = 9\n\n\
             [grid]\nwidth = 4\nheight = 3\nnum_opinions = 8\nadopt_probability = 0.25\nradius = 2\n"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.run.default_ticks, 5);
        assert_eq!(config.run.seed, 9);
        assert_eq!(config.grid.height, 3);
        assert_eq!(config.grid.adopt_probability, 0.25);
        assert_eq!(config.grid.radius, 2);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default_from("does/not/exist.toml");
        assert_eq!(config.grid.width, Config::default().grid.width);
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not toml at all [[[").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
