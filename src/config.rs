//! Configuration management for efmig.
//!
//! Paths are resolved with precedence:
//! 1. CLI flags
//! 2. Config file (efmig.toml in the current directory, or EFMIG_CONFIG)
//! 3. Default values matching the standard project layout

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Paths passed to dotnet ef
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Project containing the DbContext
    #[serde(default = "default_project")]
    pub project: PathBuf,

    /// Directory for generated migration sources
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Startup project used to build and resolve the DbContext
    #[serde(default = "default_startup_project")]
    pub startup_project: PathBuf,
}

// Default value functions
fn default_project() -> PathBuf {
    PathBuf::from("../Infrastructure")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("../Infrastructure/Data/Migrations")
}

fn default_startup_project() -> PathBuf {
    PathBuf::from("../WebUI")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            project: default_project(),
            output_dir: default_output_dir(),
            startup_project: default_startup_project(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Get the config file path.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("EFMIG_CONFIG") {
            PathBuf::from(path)
        } else {
            PathBuf::from("efmig.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.paths.project, PathBuf::from("../Infrastructure"));
        assert_eq!(
            config.paths.output_dir,
            PathBuf::from("../Infrastructure/Data/Migrations")
        );
        assert_eq!(config.paths.startup_project, PathBuf::from("../WebUI"));
    }

    #[test]
    fn test_load_from_file() {
        let temp = tempdir().expect("Failed to create temp dir");
        let path = temp.path().join("efmig.toml");

        std::fs::write(
            &path,
            r#"
[paths]
project = "src/Data"
output_dir = "src/Data/Migrations"
startup_project = "src/Api"
"#,
        )
        .expect("Failed to write config");

        let config = Config::load_from(&path).expect("Failed to load config");

        assert_eq!(config.paths.project, PathBuf::from("src/Data"));
        assert_eq!(config.paths.output_dir, PathBuf::from("src/Data/Migrations"));
        assert_eq!(config.paths.startup_project, PathBuf::from("src/Api"));
    }

    #[test]
    fn test_load_from_partial_file_fills_defaults() {
        let temp = tempdir().expect("Failed to create temp dir");
        let path = temp.path().join("efmig.toml");

        std::fs::write(&path, "[paths]\nproject = \"src/Data\"\n")
            .expect("Failed to write config");

        let config = Config::load_from(&path).expect("Failed to load config");

        assert_eq!(config.paths.project, PathBuf::from("src/Data"));
        assert_eq!(
            config.paths.output_dir,
            PathBuf::from("../Infrastructure/Data/Migrations")
        );
        assert_eq!(config.paths.startup_project, PathBuf::from("../WebUI"));
    }

    #[test]
    fn test_load_from_invalid_file_fails() {
        let temp = tempdir().expect("Failed to create temp dir");
        let path = temp.path().join("efmig.toml");

        std::fs::write(&path, "not valid toml [").expect("Failed to write config");

        assert!(Config::load_from(&path).is_err());
    }
}
