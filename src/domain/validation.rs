//! Input guardrails.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. the value is an integer (only meaningful for raw text, see [`parse_input`])
//! 2. `n >= 0`
//! 3. `n <= max_input`
//! 4. `n <= RECURSION_LIMIT` when the recursive algorithm is selected

use std::num::IntErrorKind;

use super::algorithm::Algorithm;
use super::config::ComputeConfig;
use super::error::ValidationError;

/// Largest `n` accepted for the recursive algorithm, independent of `max_input`.
pub const RECURSION_LIMIT: u64 = 2000;

/// Validate `n` against `config`, returning it as an unsigned value.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first failing check.
pub fn validate(n: i64, config: &ComputeConfig) -> Result<u64, ValidationError> {
    let n = u64::try_from(n).map_err(|_| ValidationError::Negative)?;
    if n > config.max_input {
        return Err(ValidationError::ExceedsMaximum {
            max: config.max_input,
        });
    }
    if config.algorithm == Algorithm::Recursive && n > RECURSION_LIMIT {
        return Err(ValidationError::RecursionUnsafe {
            limit: RECURSION_LIMIT,
        });
    }
    Ok(n)
}

/// Read a raw token as an integer.
///
/// Accepts surrounding whitespace and a leading sign. Integers outside the
/// `i64` range saturate to `i64::MAX` / `i64::MIN` so [`validate`] rejects
/// them as too large or negative. Floats, empty strings and anything else
/// fail with [`ValidationError::NotInteger`].
///
/// # Errors
///
/// Returns [`ValidationError::NotInteger`] carrying the rejected text.
pub fn parse_input(raw: &str) -> Result<i64, ValidationError> {
    match raw.trim().parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(ValidationError::NotInteger {
                raw: raw.to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recursive() -> ComputeConfig {
        ComputeConfig::default().with_algorithm(Algorithm::Recursive)
    }

    #[test]
    fn test_accepts_zero_and_max() {
        let config = ComputeConfig::default();
        assert_eq!(validate(0, &config), Ok(0));
        assert_eq!(validate(100_000, &config), Ok(100_000));
    }

    #[test]
    fn test_negative_rejected() {
        let err = validate(-1, &ComputeConfig::default()).unwrap_err();
        assert_eq!(err, ValidationError::Negative);
        assert!(err.to_string().contains(">= 0"));
    }

    #[test]
    fn test_above_max_names_the_maximum() {
        let config = ComputeConfig::default().with_max_input(10);
        let err = validate(11, &config).unwrap_err();
        assert_eq!(err, ValidationError::ExceedsMaximum { max: 10 });
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_recursive_ceiling() {
        assert_eq!(validate(2000, &recursive()), Ok(2000));
        assert_eq!(
            validate(2001, &recursive()),
            Err(ValidationError::RecursionUnsafe { limit: 2000 })
        );
        assert_eq!(validate(2001, &ComputeConfig::default()), Ok(2001));
    }

    #[test]
    fn test_maximum_checked_before_recursion_ceiling() {
        let config = recursive().with_max_input(1000);
        assert_eq!(
            validate(1500, &config),
            Err(ValidationError::ExceedsMaximum { max: 1000 })
        );
    }

    #[test]
    fn test_negative_checked_first() {
        let config = recursive().with_max_input(0);
        assert_eq!(validate(-5, &config), Err(ValidationError::Negative));
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input(" 42 "), Ok(42));
        assert_eq!(parse_input("-3"), Ok(-3));
        assert!(matches!(
            parse_input("2.5"),
            Err(ValidationError::NotInteger { .. })
        ));
        assert!(matches!(
            parse_input("abc"),
            Err(ValidationError::NotInteger { .. })
        ));
        assert_eq!(
            parse_input("1e3").unwrap_err().to_string(),
            "n must be an integer."
        );
    }

    #[test]
    fn test_oversized_integer_exceeds_maximum() {
        let n = parse_input("99999999999999999999").unwrap();
        let err = validate(n, &ComputeConfig::default()).unwrap_err();
        assert_eq!(err, ValidationError::ExceedsMaximum { max: 100_000 });
        assert_eq!(err.to_string(), "n exceeds the allowed maximum (100000).");
    }

    #[test]
    fn test_oversized_negative_integer_is_negative() {
        let n = parse_input("-99999999999999999999").unwrap();
        let err = validate(n, &ComputeConfig::default()).unwrap_err();
        assert_eq!(err, ValidationError::Negative);
        assert_eq!(err.to_string(), "n must be >= 0.");
    }
}
