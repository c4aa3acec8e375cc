//! Benchmark ranges and records.

use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::ValidationError;

/// Inclusive arithmetic sequence `start, start + step, ... <= stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchRange {
    pub start: i64,
    pub stop: i64,
    pub step: i64,
}

impl BenchRange {
    #[must_use]
    pub const fn new(start: i64, stop: i64, step: i64) -> Self {
        Self { start, stop, step }
    }

    /// Sampled values in order. Empty when `start > stop`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidStep`] when `step < 1`.
    pub fn samples(self) -> Result<impl Iterator<Item = i64>, ValidationError> {
        if self.step < 1 {
            return Err(ValidationError::InvalidStep { step: self.step });
        }
        let step = usize::try_from(self.step).unwrap_or(usize::MAX);
        Ok((self.start..=self.stop).step_by(step))
    }

    /// Number of samples, or zero for an invalid step.
    #[must_use]
    pub fn len(self) -> u64 {
        if self.step < 1 || self.start > self.stop {
            return 0;
        }
        let span = self.stop.abs_diff(self.start);
        span / self.step.unsigned_abs() + 1
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl FromStr for BenchRange {
    type Err = String;

    /// Parse `start:stop[:step]`; `step` defaults to 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        match parts[..] {
            [start, stop] => Ok(Self::new(bound(start)?, bound(stop)?, 1)),
            [start, stop, step] => Ok(Self::new(bound(start)?, bound(stop)?, bound(step)?)),
            _ => Err("range must have the form start:stop[:step]".to_string()),
        }
    }
}

fn bound(raw: &str) -> Result<i64, String> {
    raw.parse::<i64>()
        .map_err(|_| format!("range bound '{raw}' is not an integer"))
}

/// One timed sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    pub n: u64,
    /// Decimal digits in `n!`.
    pub digits: usize,
    /// Wall-clock time spent computing `n!`.
    pub seconds: f64,
    pub algorithm: &'static str,
}

/// Render records as CSV with header `n,digits,seconds,method`.
#[must_use]
pub fn to_csv(records: &[BenchmarkRecord]) -> String {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push("n,digits,seconds,method".to_string());
    rows.extend(
        records
            .iter()
            .map(|r| format!("{},{},{},{}", r.n, r.digits, r.seconds, r.algorithm)),
    );
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_step() {
        assert_eq!("1:10:3".parse::<BenchRange>(), Ok(BenchRange::new(1, 10, 3)));
        assert_eq!("5:8".parse::<BenchRange>(), Ok(BenchRange::new(5, 8, 1)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("10".parse::<BenchRange>().is_err());
        assert!("1:2:3:4".parse::<BenchRange>().is_err());
        assert!("a:5".parse::<BenchRange>().is_err());
    }

    #[test]
    fn test_samples() {
        let values: Vec<i64> = BenchRange::new(1, 10, 3).samples().unwrap().collect();
        assert_eq!(values, vec![1, 4, 7, 10]);
        assert_eq!(BenchRange::new(1, 10, 3).len(), 4);
        assert_eq!(BenchRange::new(1, 9, 3).len(), 3);
    }

    #[test]
    fn test_empty_when_start_after_stop() {
        assert_eq!(BenchRange::new(5, 1, 1).samples().unwrap().count(), 0);
        assert!(BenchRange::new(5, 1, 1).is_empty());
    }

    #[test]
    fn test_zero_step_rejected() {
        assert!(matches!(
            BenchRange::new(1, 5, 0).samples(),
            Err(ValidationError::InvalidStep { step: 0 })
        ));
    }

    #[test]
    fn test_csv_header_and_rows() {
        let records = vec![BenchmarkRecord {
            n: 3,
            digits: 1,
            seconds: 0.5,
            algorithm: "iterative",
        }];
        assert_eq!(to_csv(&records), "n,digits,seconds,method\n3,1,0.5,iterative");
    }
}
