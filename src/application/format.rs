//! Presentation formatters.
//!
//! Pure functions over an ordered slice of [`Factorial`] pairs. They neither
//! validate nor recompute; input order is output order.

use serde::Serialize;

use crate::domain::config::OutputFormat;
use crate::domain::factorial::Factorial;
use crate::error::Result;

/// Structured record for one result.
///
/// `value` is a decimal string so consumers with fixed-width integers do not
/// lose precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorialRecord {
    pub n: u64,
    pub value: String,
    pub digits: usize,
}

impl From<&Factorial> for FactorialRecord {
    fn from(pair: &Factorial) -> Self {
        let value = pair.value.to_str_radix(10);
        Self {
            n: pair.n,
            digits: value.len(),
            value,
        }
    }
}

/// `<n>! = <value>` per line, no trailing newline.
#[must_use]
pub fn to_text(pairs: &[Factorial]) -> String {
    pairs
        .iter()
        .map(|pair| format!("{}! = {}", pair.n, pair.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One structured record per pair.
#[must_use]
pub fn to_records(pairs: &[Factorial]) -> Vec<FactorialRecord> {
    pairs.iter().map(FactorialRecord::from).collect()
}

/// Header `n,value,digits` followed by one row per pair.
#[must_use]
pub fn to_csv(pairs: &[Factorial]) -> String {
    let mut rows = Vec::with_capacity(pairs.len() + 1);
    rows.push("n,value,digits".to_string());
    rows.extend(
        to_records(pairs)
            .into_iter()
            .map(|r| format!("{},{},{}", r.n, r.value, r.digits)),
    );
    rows.join("\n")
}

/// Render `pairs` in the requested shape.
///
/// JSON is a pretty-printed array of [`FactorialRecord`]s.
///
/// # Errors
///
/// Returns [`crate::error::Error::Json`] if serialization fails.
pub fn format_as(pairs: &[Factorial], shape: OutputFormat) -> Result<String> {
    match shape {
        OutputFormat::Text => Ok(to_text(pairs)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&to_records(pairs))?),
        OutputFormat::Csv => Ok(to_csv(pairs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn pairs() -> Vec<Factorial> {
        vec![
            Factorial::new(5, BigUint::from(120u32)),
            Factorial::new(3, BigUint::from(6u32)),
        ]
    }

    #[test]
    fn test_text() {
        assert_eq!(to_text(&pairs()), "5! = 120\n3! = 6");
        assert_eq!(to_text(&[]), "");
    }

    #[test]
    fn test_records() {
        let records = to_records(&pairs()[..1]);
        assert_eq!(
            records,
            vec![FactorialRecord {
                n: 5,
                value: "120".into(),
                digits: 3,
            }]
        );
    }

    #[test]
    fn test_csv() {
        assert_eq!(to_csv(&pairs()[..1]), "n,value,digits\n5,120,3");
        assert_eq!(to_csv(&[]), "n,value,digits");
    }

    #[test]
    fn test_json_shape() {
        let rendered = format_as(&pairs()[..1], OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{ "n": 5, "value": "120", "digits": 3 }])
        );
    }

    #[test]
    fn test_formatting_is_repeatable() {
        let input = pairs();
        for shape in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv] {
            assert_eq!(
                format_as(&input, shape).unwrap(),
                format_as(&input, shape).unwrap()
            );
        }
    }
}
