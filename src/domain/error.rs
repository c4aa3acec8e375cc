//! Domain errors for factorial computation.
//!
//! This module defines the two error kinds the core produces:
//!
//! - [`ValidationError`] - caller-supplied input violates a guardrail. Always
//!   detected before any computation starts.
//! - [`ComputationError`] - a strategy failed on input that passed validation.
//!   Always wraps the underlying cause.
//!
//! [`UnknownAlgorithm`] is returned by the strategy factory when a name does
//! not match any known alias.
//!
//! # Examples
//!
//! ```
//! use factorlab::domain::error::ValidationError;
//! use factorlab::domain::validation::validate;
//! use factorlab::domain::config::ComputeConfig;
//!
//! let result = validate(-1, &ComputeConfig::default());
//! assert!(matches!(result, Err(ValidationError::Negative)));
//! ```

use thiserror::Error;

/// Boxed cause reported by a strategy when it fails internally.
pub type StrategyFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised when an input violates a guardrail.
///
/// The display text of each variant is the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The raw input could not be read as an integer.
    #[error("n must be an integer.")]
    NotInteger {
        /// The rejected input, as supplied.
        raw: String,
    },

    /// Factorial is undefined for negative numbers.
    #[error("n must be >= 0.")]
    Negative,

    /// The input is above the configured maximum.
    #[error("n exceeds the allowed maximum ({max}).")]
    ExceedsMaximum {
        /// The configured `max_input`.
        max: u64,
    },

    /// The recursive strategy cannot take inputs this large.
    #[error("the recursive strategy is not safe for n > {limit}.")]
    RecursionUnsafe {
        /// Static recursion ceiling.
        limit: u64,
    },

    /// A benchmark range must advance.
    #[error("step must be >= 1.")]
    InvalidStep {
        /// The rejected step.
        step: i64,
    },
}

/// A strategy failed despite valid input.
#[derive(Error, Debug)]
#[error("failure during factorial computation")]
pub struct ComputationError {
    /// Name of the strategy that failed.
    pub strategy: &'static str,
    /// The input being computed.
    pub n: u64,
    #[source]
    source: StrategyFailure,
}

impl ComputationError {
    /// Wrap a strategy failure.
    #[must_use]
    pub fn new(strategy: &'static str, n: u64, source: StrategyFailure) -> Self {
        Self {
            strategy,
            n,
            source,
        }
    }
}

/// The strategy factory did not recognise a name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy: {name}")]
pub struct UnknownAlgorithm {
    /// The name as supplied by the caller.
    pub name: String,
}
