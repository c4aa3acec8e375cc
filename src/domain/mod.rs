//! Computation-independent domain logic: strategies, guardrails, errors.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod factorial;
pub mod strategy;
pub mod validation;

pub use algorithm::{strategy_for, Algorithm};
pub use config::{ComputeConfig, OutputFormat, DEFAULT_MAX_INPUT};
pub use error::{ComputationError, UnknownAlgorithm, ValidationError};
pub use factorial::Factorial;
pub use strategy::Strategy;
pub use validation::{parse_input, validate, RECURSION_LIMIT};
