//! Runner configuration
//!
//! Settings come from an optional TOML file and are then overridden by
//! environment variables:
//! - `SUITECHECK_PREFIX` — test method name prefix
//! - `SUITECHECK_VERBOSE` — one report line per test (`true`, `1`, `yes`)
//! - `SUITECHECK_NO_COLOR` — plain report output (`true`, `1`, `yes`)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefix a method name must start with to be run as a test
pub const DEFAULT_PREFIX: &str = "Test";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Suite runner and reporter settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Method name prefix selecting tests
    pub prefix: String,

    /// Print one line per test instead of progress dots
    pub verbose: bool,

    /// Disable colored report output
    pub no_color: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            verbose: false,
            no_color: false,
        }
    }
}

impl RunnerConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::parse(content, Path::new("<string>"))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, origin: &Path) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::TomlParseError {
            file: origin.to_path_buf(),
            error: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the runner cannot work with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply `SUITECHECK_*` environment variable overrides
    pub fn apply_env_overrides(mut self) -> ConfigResult<Self> {
        if let Ok(prefix) = env::var("SUITECHECK_PREFIX") {
            self.prefix = prefix;
        }

        if let Ok(verbose) = env::var("SUITECHECK_VERBOSE") {
            self.verbose = parse_flag(&verbose);
        }

        if let Ok(no_color) = env::var("SUITECHECK_NO_COLOR") {
            self.no_color = parse_flag(&no_color);
        }

        self.validate()?;
        Ok(self)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}
