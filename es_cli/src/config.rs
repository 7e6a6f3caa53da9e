//! Scorer configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use std::path::PathBuf;

/// Default snapshot location
pub const DEFAULT_DATA_FILE: &str = "tournament.json";

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Where the tournament snapshot is stored
    pub data_file: PathBuf,
    /// Whether `clear` and `reset` ask before running
    pub confirm_destructive: bool,
    /// Interactive prompt
    pub prompt: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            confirm_destructive: true,
            prompt: "> ".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `data_file_override` - Optional snapshot path (from `--data`)
    /// * `assume_yes` - Skip confirmations (from `--yes`)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but unusable
    pub fn from_env(
        data_file_override: Option<PathBuf>,
        assume_yes: bool,
    ) -> Result<Self, ConfigError> {
        let data_file = data_file_override
            .or_else(|| std::env::var("SCORER_DATA_FILE").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let confirm = match std::env::var("SCORER_CONFIRM") {
            Ok(value) => parse_bool(&value).ok_or_else(|| ConfigError::Invalid {
                var: "SCORER_CONFIRM".to_string(),
                reason: format!("Expected true or false, got '{}'", value),
            })?,
            Err(_) => true,
        };
        let confirm_destructive = confirm && !assume_yes;

        let prompt = std::env::var("SCORER_PROMPT").unwrap_or_else(|_| "> ".to_string());

        let config = CliConfig {
            data_file,
            confirm_destructive,
            prompt,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                var: "SCORER_DATA_FILE".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.data_file.is_dir() {
            return Err(ConfigError::Invalid {
                var: "SCORER_DATA_FILE".to_string(),
                reason: format!("{} is a directory", self.data_file.display()),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
