//! Per-invocation computation settings.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::algorithm::Algorithm;

/// Default guardrail for `n`.
pub const DEFAULT_MAX_INPUT: u64 = 100_000;

/// Rendered output shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<n>! = <value>` lines.
    #[default]
    Text,
    /// Array of `{n, value, digits}` records.
    Json,
    /// `n,value,digits` header plus one row per result.
    Csv,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Immutable configuration for one invocation of the service.
///
/// Built once (from defaults, a settings file, and command-line flags) and
/// passed by reference; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComputeConfig {
    /// Largest accepted `n`.
    pub max_input: u64,
    /// Strategy used for every computation.
    pub algorithm: Algorithm,
    /// Shape handed to the formatter.
    pub output: OutputFormat,
}

impl ComputeConfig {
    #[must_use]
    pub const fn new(max_input: u64, algorithm: Algorithm, output: OutputFormat) -> Self {
        Self {
            max_input,
            algorithm,
            output,
        }
    }

    /// Same configuration with a different algorithm.
    #[must_use]
    pub fn with_algorithm(self, algorithm: Algorithm) -> Self {
        Self { algorithm, ..self }
    }

    /// Same configuration with a different maximum.
    #[must_use]
    pub fn with_max_input(self, max_input: u64) -> Self {
        Self { max_input, ..self }
    }
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT, Algorithm::default(), OutputFormat::default())
    }
}
