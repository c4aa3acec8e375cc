//! Result pairs.

use num_bigint::BigUint;

/// `n` together with `n!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorial {
    pub n: u64,
    pub value: BigUint,
}

impl Factorial {
    #[must_use]
    pub fn new(n: u64, value: BigUint) -> Self {
        Self { n, value }
    }

    /// Number of decimal digits in the value.
    #[must_use]
    pub fn digits(&self) -> usize {
        digit_count(&self.value)
    }
}

impl From<(u64, BigUint)> for Factorial {
    fn from((n, value): (u64, BigUint)) -> Self {
        Self::new(n, value)
    }
}

/// Number of decimal digits in `value`.
#[must_use]
pub fn digit_count(value: &BigUint) -> usize {
    value.to_str_radix(10).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(Factorial::new(5, BigUint::from(120u32)).digits(), 3);
        assert_eq!(Factorial::new(0, BigUint::from(1u32)).digits(), 1);
    }
}
