//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI arguments (not handled here)
//!
//! # Locations
//!
//! Searched in order, first existing file wins:
//! 1. Explicit path passed by the caller (`--config`)
//! 2. `$HASHER_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/hasher/config.toml`
//! 4. `~/.hasher/config.toml`
//!
//! The hash seed is deliberately absent: vertex and edge runs must agree on
//! digests, so it is a constant of [`crate::core::hasher`].
//!
//! # Example
//!
//! ```no_run
//! use graphkeys::core::config::Config;
//!
//! let result = Config::load(None).unwrap();
//! let config = result.config;
//!
//! println!("Audit table: {}", config.table_path().display());
//! println!("Progress every {} records", config.progress_interval());
//! ```

pub mod schema;

pub use schema::FileConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::transform::MissingKeyPolicy;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "HASHER_CONFIG";

/// Default audit table path.
pub const DEFAULT_TABLE_PATH: &str = "table.jsonl";

/// Default number of successful records between progress lines.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1_000_000;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents (all `None` when no file was found)
    pub file: FileConfig,
    /// Path the file was loaded from
    loaded_from: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Files found through the environment or
    /// default locations are optional; when none exists defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be read, parsed, or validated.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::locate(&mut warnings),
        };

        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Config::default(),
        };

        Ok(ConfigLoadResult { config, warnings })
    }

    /// Read, parse, and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: FileConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Self {
            file,
            loaded_from: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file in the implicit locations.
    fn locate(warnings: &mut Vec<ConfigWarning>) -> Option<PathBuf> {
        // 1. Check $HASHER_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
            warnings.push(ConfigWarning {
                message: format!("{} points to a missing file, ignoring it", CONFIG_ENV),
                path,
            });
        }

        // 2. Check $XDG_CONFIG_HOME/hasher/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("hasher/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.hasher/config.toml
        Self::home_config_path().ok().filter(|path| path.exists())
    }

    /// Get the config path under the home directory.
    ///
    /// Returns `~/.hasher/config.toml`.
    pub fn home_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".hasher/config.toml"))
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Successful records between progress lines.
    ///
    /// Defaults to one million.
    pub fn progress_interval(&self) -> u64 {
        self.file
            .progress_interval
            .unwrap_or(DEFAULT_PROGRESS_INTERVAL)
    }

    /// Default audit table path.
    ///
    /// Defaults to `table.jsonl` in the working directory.
    pub fn table_path(&self) -> PathBuf {
        PathBuf::from(
            self.file
                .table_path
                .as_deref()
                .unwrap_or(DEFAULT_TABLE_PATH),
        )
    }

    /// Handling of vertices without `_key`.
    ///
    /// Defaults to rejecting them.
    pub fn missing_key(&self) -> MissingKeyPolicy {
        self.file
            .missing_key
            .as_deref()
            .and_then(MissingKeyPolicy::from_name)
            .unwrap_or_default()
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_file() {
        let config = Config::default();
        assert_eq!(config.progress_interval(), 1_000_000);
        assert_eq!(config.table_path(), PathBuf::from("table.jsonl"));
        assert_eq!(config.missing_key(), MissingKeyPolicy::Reject);
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            progress_interval = 5
            table_path = "audit.jsonl"
            missing_key = "pass-through"
            "#,
        )
        .unwrap();

        let result = Config::load(Some(path.as_path())).unwrap();
        let config = result.config;
        assert_eq!(config.progress_interval(), 5);
        assert_eq!(config.table_path(), PathBuf::from("audit.jsonl"));
        assert_eq!(config.missing_key(), MissingKeyPolicy::PassThrough);
        assert_eq!(config.loaded_from(), Some(path.as_path()));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");
        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(ConfigError::ReadError { .. })
        ));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "progress_interval = [").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn invalid_value_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "missing_key = \"skip\"\n").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn env_var_selects_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("env.toml");
        fs::write(&path, "progress_interval = 3\n").unwrap();

        std::env::set_var(CONFIG_ENV, &path);
        let result = Config::load(None).unwrap();
        std::env::remove_var(CONFIG_ENV);

        assert_eq!(result.config.progress_interval(), 3);
    }
}
