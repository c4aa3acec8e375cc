//! Application services (use cases).
//!
//! The service orchestrates domain validation and strategies; the
//! formatters turn its results into text, JSON, or CSV.

pub mod bench;
pub mod format;
pub mod service;

pub use bench::{BenchRange, BenchmarkRecord};
pub use format::{format_as, FactorialRecord};
pub use service::FactorialService;
