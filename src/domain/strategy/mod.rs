//! Strategy abstraction for factorial computation.
//!
//! This module provides three interchangeable algorithms for `n!`:
//!
//! - **Iterative**: running product over `2..=n` with a single accumulator
//! - **Recursive**: naive `f(n) = n * f(n - 1)`, one frame per decrement
//! - **Product**: the product of the range `2..=n` as a single reduction
//!
//! # Architecture
//!
//! Each strategy implements the [`Strategy`] trait, which defines:
//! - `name()` - Unique identifier for logging and benchmark records
//! - `compute()` - Core computation
//!
//! All strategies are stateless, produce bit-identical results for the same
//! `n`, and may be reused across calls. Pick one by name or alias through
//! [`crate::domain::algorithm::Algorithm`].
//!
//! # Example
//!
//! ```
//! use factorlab::domain::strategy::{IterativeStrategy, Strategy};
//! use num_bigint::BigUint;
//!
//! let value = IterativeStrategy.compute(5).unwrap();
//! assert_eq!(value, BigUint::from(120u32));
//! ```

pub mod iterative;
pub mod product;
pub mod recursive;

pub use iterative::IterativeStrategy;
pub use product::ProductStrategy;
pub use recursive::{RecursionDepthExceeded, RecursiveStrategy};

use num_bigint::BigUint;

use crate::domain::error::StrategyFailure;

/// A factorial algorithm.
///
/// Implementations must satisfy `compute(n) == n!` and must not hold any
/// per-call mutable state.
pub trait Strategy: Send + Sync {
    /// Unique identifier for this strategy.
    fn name(&self) -> &'static str;

    /// Compute `n!`.
    ///
    /// Returns an error only when the algorithm itself cannot proceed; the
    /// caller is responsible for validating `n` beforehand.
    fn compute(&self, n: u64) -> Result<BigUint, StrategyFailure>;
}
