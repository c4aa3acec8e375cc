use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::{ComputationError, UnknownAlgorithm, ValidationError};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Base error kind for the crate.
///
/// Callers can match a specific kind (`Validation`, `Computation`) or treat
/// any `Error` generically.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Computation(#[from] ComputationError),

    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Usage(String),

    #[error("could not read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write output file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Problems caused by the caller's input, flags, or files map to 2;
    /// anything else is an internal failure and maps to 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_)
            | Self::Computation(_)
            | Self::UnknownAlgorithm(_)
            | Self::Config(_)
            | Self::Usage(_)
            | Self::ReadInput { .. }
            | Self::WriteOutput { .. } => 2,
            Self::Io(_) | Self::Json(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
