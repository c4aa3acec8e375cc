//! Product-over-range factorial.

use num_bigint::BigUint;
use num_traits::One;

use super::Strategy;
use crate::domain::error::StrategyFailure;

/// Reduces the range `2..=n` with multiplication.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductStrategy;

impl Strategy for ProductStrategy {
    fn name(&self) -> &'static str {
        "product"
    }

    fn compute(&self, n: u64) -> Result<BigUint, StrategyFailure> {
        if n <= 1 {
            return Ok(BigUint::one());
        }
        Ok((2..=n).map(BigUint::from).product())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(ProductStrategy.compute(0).unwrap(), BigUint::one());
        assert_eq!(ProductStrategy.compute(1).unwrap(), BigUint::one());
    }

    #[test]
    fn test_digit_count_of_hundred_factorial() {
        let value = ProductStrategy.compute(100).unwrap();
        assert_eq!(value.to_string().len(), 158);
    }
}
