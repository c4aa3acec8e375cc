//! Factorlab - factorial computation with interchangeable strategies.
//!
//! This crate validates inputs against configurable guardrails, computes
//! `n!` with one of three strategies, and renders results as text, JSON, or
//! CSV. A benchmark mode times computation across a range of inputs.
//!
//! # Architecture
//!
//! - **`domain::strategy`** - Pluggable factorial algorithms
//!   - `IterativeStrategy` - running product with one accumulator
//!   - `RecursiveStrategy` - naive recursion, capped at n = 2000 by validation
//!   - `ProductStrategy` - product over the range `2..=n`
//!
//! - **`domain::algorithm`** - Closed set of algorithms and the name/alias factory
//! - **`domain::validation`** - Guardrails checked before any computation
//! - **`application`** - `FactorialService` and the output formatters
//!
//! # Modules
//!
//! - [`domain`] - Strategies, validation, configuration values, domain errors
//! - [`application`] - Computation service, benchmarking, formatting
//! - [`infrastructure`] - Settings file and logging setup
//! - [`adapter`] - Command-line interface
//! - [`error`] - Crate-wide error type
//!
//! # Example
//!
//! ```
//! use factorlab::application::{format_as, FactorialService};
//! use factorlab::domain::{Algorithm, ComputeConfig, OutputFormat};
//!
//! let config = ComputeConfig::default().with_algorithm(Algorithm::Iterative);
//! let service = FactorialService::new(config);
//! let pairs = service.compute_many([3, 4]).unwrap();
//! assert_eq!(format_as(&pairs, OutputFormat::Text).unwrap(), "3! = 6\n4! = 24");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
