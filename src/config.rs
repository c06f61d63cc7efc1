//! Runtime configuration for the binaries
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. An optional YAML file
//! 3. `SECGRAPH_OUTPUT` / `SECGRAPH_LOG` environment variables

use crate::export::DotOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

pub const OUTPUT_ENV: &str = "SECGRAPH_OUTPUT";
pub const LOG_ENV: &str = "SECGRAPH_LOG";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Destination of the DOT export
    pub output_path: PathBuf,
    /// Log level (`trace`, `debug`, `info`, `warn`, `error`)
    pub log_level: String,
    /// DOT rendering options
    pub dot: DotOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("security_graph.dot"),
            log_level: "info".to_string(),
            dot: DotOptions::default(),
        }
    }
}

impl AppConfig {
    /// Load defaults, then the YAML file if given, then environment overrides
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a YAML config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Apply overrides from a variable lookup (the process environment in `load`)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(output) = lookup(OUTPUT_ENV) {
            self.output_path = PathBuf::from(output);
        }
        if let Some(level) = lookup(LOG_ENV) {
            self.log_level = level;
        }
    }

    /// Parsed tracing level
    pub fn tracing_level(&self) -> ConfigResult<Level> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.output_path, PathBuf::from("security_graph.dot"));
        assert_eq!(config.tracing_level().unwrap(), Level::INFO);
        assert_eq!(config.dot.graph_name, "KnowledgeGraph");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml("log_level: debug\ndot:\n  rank_dir: TB\n").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.dot.rank_dir.as_deref(), Some("TB"));
        assert_eq!(config.dot.graph_name, "KnowledgeGraph");
        assert_eq!(config.output_path, PathBuf::from("security_graph.dot"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([(OUTPUT_ENV, "/tmp/out.dot"), (LOG_ENV, "warn")]);
        let mut config = AppConfig::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.output_path, PathBuf::from("/tmp/out.dot"));
        assert_eq!(config.tracing_level().unwrap(), Level::WARN);
    }

    #[test]
    fn test_invalid_log_level() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.tracing_level(), Err(ConfigError::InvalidLogLevel(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = AppConfig::from_file(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
