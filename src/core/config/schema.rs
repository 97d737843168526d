//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Location
//!
//! Searched in order of precedence:
//! 1. `--config <path>` on the command line
//! 2. `$HASHER_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/hasher/config.toml`
//! 4. `~/.hasher/config.toml`
//!
//! # Validation
//!
//! Values are validated after parsing. Unknown keys are rejected so a
//! misspelled option does not silently fall back to its default.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Configuration file contents.
///
/// # Example
///
/// ```toml
/// progress_interval = 500000
/// table_path = "audit/table.jsonl"
/// missing_key = "reject"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Successful records between progress lines
    pub progress_interval: Option<u64>,

    /// Default audit table path for `vertices`
    pub table_path: Option<String>,

    /// Handling of vertices without `_key` ("reject" or "pass-through")
    pub missing_key: Option<String>,
}

impl FileConfig {
    /// Accepted values for `missing_key`.
    pub const VALID_MISSING_KEY: &'static [&'static str] = &["reject", "pass-through"];

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.progress_interval == Some(0) {
            return Err(ConfigError::InvalidValue(
                "progress_interval must be greater than zero".to_string(),
            ));
        }

        if let Some(path) = &self.table_path {
            if path.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "table_path cannot be empty".to_string(),
                ));
            }
        }

        if let Some(policy) = &self.missing_key {
            if !Self::VALID_MISSING_KEY.contains(&policy.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid missing_key '{}', must be one of: {}",
                    policy,
                    Self::VALID_MISSING_KEY.join(", ")
                )));
            }
        }

        Ok(())
    }
}
