//! Settings file loading and validation.
//!
//! Provides the [`Settings`] struct that aggregates the optional TOML file.
//! Every section may be omitted; missing values take built-in defaults, and
//! command-line flags are applied on top by the CLI.
//!
//! # Example
//!
//! ```
//! use factorlab::domain::Algorithm;
//! use factorlab::infrastructure::config::settings::Settings;
//!
//! let settings = Settings::parse_toml(
//!     r#"
//!     [compute]
//!     max_input = 500
//!     algorithm = "iter"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(settings.compute.max_input, 500);
//! assert_eq!(settings.compute.algorithm, Algorithm::Iterative);
//! ```

use serde::Deserialize;
use std::path::Path;

use super::logging::LoggingConfig;
use crate::domain::config::ComputeConfig;
use crate::error::{ConfigError, Result};

/// Aggregated settings file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Guardrail, algorithm, and output shape.
    pub compute: ComputeConfig,

    /// Logging level and format.
    pub logging: LoggingConfig,
}

impl Settings {
    /// Parse settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` when given, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::load`].
    pub fn load_optional<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("expected \"pretty\" or \"json\", got \"{other}\""),
                }
                .into());
            }
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
