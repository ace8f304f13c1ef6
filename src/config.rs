//! Configuration file loading
//!
//! The config is a small YAML document read once at startup:
//!
//! ```yaml
//! log_dir: ./logs
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Errors raised while loading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Process settings, immutable after load
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Directory that receives one log file per run
    pub log_dir: PathBuf,
}

impl Config {
    /// Load and parse the config file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a config from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml() {
        let config = Config::from_yaml("log_dir: ./logs\n").unwrap();
        assert_eq!(config.log_dir, PathBuf::from("./logs"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = Config::from_yaml("log_dir: /var/log/s2m\nextra: 1\n").unwrap();
        assert_eq!(config.log_dir, PathBuf::from("/var/log/s2m"));
    }

    #[test]
    fn test_missing_log_dir_is_error() {
        assert!(Config::from_yaml("other: value\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let err = Config::load(&temp.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "log_dir: [unclosed\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    fn test_load_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "log_dir: logs\n").unwrap();
        assert_eq!(Config::load(&path).unwrap().log_dir, PathBuf::from("logs"));
    }
}
