//! Naive recursive factorial.
//!
//! Uses one call frame per decrement, so stack usage grows linearly with `n`.
//! The validation policy keeps service callers well under
//! [`RecursiveStrategy::MAX_DEPTH`]; direct callers above it get an error
//! instead of a stack overflow.

use num_bigint::BigUint;
use num_traits::One;
use thiserror::Error;

use super::Strategy;
use crate::domain::error::StrategyFailure;

/// The requested depth is beyond what the strategy will recurse.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("recursion depth {n} exceeds hard limit {max_depth}")]
pub struct RecursionDepthExceeded {
    pub n: u64,
    pub max_depth: u64,
}

/// Computes `f(n) = n * f(n - 1)` with base case `f(n < 2) = 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveStrategy;

impl RecursiveStrategy {
    /// Hard ceiling on recursion depth.
    pub const MAX_DEPTH: u64 = 4096;

    fn factorial(n: u64) -> BigUint {
        if n < 2 {
            return BigUint::one();
        }
        Self::factorial(n - 1) * n
    }
}

impl Strategy for RecursiveStrategy {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn compute(&self, n: u64) -> Result<BigUint, StrategyFailure> {
        if n > Self::MAX_DEPTH {
            return Err(Box::new(RecursionDepthExceeded {
                n,
                max_depth: Self::MAX_DEPTH,
            }));
        }
        Ok(Self::factorial(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(RecursiveStrategy.compute(0).unwrap(), BigUint::one());
        assert_eq!(RecursiveStrategy.compute(1).unwrap(), BigUint::one());
    }

    #[test]
    fn test_refuses_beyond_hard_limit() {
        let err = RecursiveStrategy
            .compute(RecursiveStrategy::MAX_DEPTH + 1)
            .unwrap_err();
        let depth = err
            .downcast_ref::<RecursionDepthExceeded>()
            .expect("depth error");
        assert_eq!(depth.max_depth, RecursiveStrategy::MAX_DEPTH);
    }
}
