//! Configuration management for the CLI
//!
//! Configuration is read from one file (YAML or JSON); every field has a
//! default, and command-line flags take precedence over file values.

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::logging::LogFormat;
use schemapath_core::FailurePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputSettings,

    /// Logging settings
    pub logging: LogSettings,

    /// Validation settings
    pub validation: ValidationSettings,

    /// Path settings
    pub paths: PathSettings,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output format when `--output` is not given
    pub format: OutputFormat,

    /// Use colored output on terminals
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log filter used when no `-v` flag is given (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<LogFormat>,
}

/// Validation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Diagnostic reported when every `anyOf` alternative fails
    pub failure_policy: FailurePolicy,
}

/// Path configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Directory searched for schema names that are not existing files
    pub schemas_dir: Option<PathBuf>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => {
                return Err(Error::config(format!(
                    "Unsupported config file extension: {}",
                    path.display()
                )))
            }
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Default configuration file paths, in search order
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".schemapath.yaml"),
            PathBuf::from(".schemapath.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let schemapath_dir = config_dir.join("schemapath");
            paths.push(schemapath_dir.join("config.yaml"));
            paths.push(schemapath_dir.join("config.json"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Human);
        assert!(config.output.color);
        assert_eq!(config.validation.failure_policy, FailurePolicy::Last);
        assert!(config.paths.schemas_dir.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_partial_yaml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "validation:\n  failure_policy: deepest\noutput:\n  format: json-pretty\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.validation.failure_policy, FailurePolicy::Deepest);
        assert_eq!(config.output.format, OutputFormat::JsonPretty);
        assert!(config.output.color);
    }

    #[test]
    fn test_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"logging": {"level": "debug", "format": "json"}, "paths": {"schemas_dir": "schemas"}}"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.format, Some(LogFormat::Json));
        assert_eq!(config.paths.schemas_dir, Some(PathBuf::from("schemas")));
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempdir().unwrap();

        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"validation": {"failure_policy": "first"}}"#).unwrap();
        assert!(matches!(Config::from_file(&path), Err(Error::Json(_))));

        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();
        assert!(matches!(Config::from_file(&path), Err(Error::Config(_))));

        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            Config::load_with_file(Some(&missing)),
            Err(Error::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_round_trip_through_yaml() {
        let mut config = Config::default();
        config.validation.failure_policy = FailurePolicy::Deepest;
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.validation.failure_policy, FailurePolicy::Deepest);
    }
}
