//! Iterative factorial.

use num_bigint::BigUint;
use num_traits::One;

use super::Strategy;
use crate::domain::error::StrategyFailure;

/// Multiplies a single accumulator by each integer from 2 to `n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeStrategy;

impl Strategy for IterativeStrategy {
    fn name(&self) -> &'static str {
        "iterative"
    }

    fn compute(&self, n: u64) -> Result<BigUint, StrategyFailure> {
        let mut acc = BigUint::one();
        for k in 2..=n {
            acc *= k;
        }
        Ok(acc)
    }
}
