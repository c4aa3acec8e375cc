//! Factorial computation service.
//!
//! Orchestrates validation, strategy selection, computation, and error
//! translation for single values, ordered batches, and timed benchmarks.

use std::time::Instant;

use num_bigint::BigUint;

use super::bench::{BenchRange, BenchmarkRecord};
use crate::domain::config::ComputeConfig;
use crate::domain::error::ComputationError;
use crate::domain::factorial::{digit_count, Factorial};
use crate::domain::strategy::Strategy;
use crate::domain::validation;
use crate::error::Result;

/// Computes factorials under a fixed configuration.
///
/// The strategy is resolved from `config.algorithm` at construction and reused
/// for every call; neither it nor the configuration changes afterwards.
pub struct FactorialService {
    config: ComputeConfig,
    strategy: Box<dyn Strategy>,
}

impl FactorialService {
    /// Create a service using the strategy for `config.algorithm`.
    #[must_use]
    pub fn new(config: ComputeConfig) -> Self {
        Self {
            strategy: config.algorithm.strategy(),
            config,
        }
    }

    /// Create a service with an explicit strategy instance.
    ///
    /// Validation still follows `config`, including the recursion ceiling
    /// for `config.algorithm`.
    #[must_use]
    pub fn with_strategy(config: ComputeConfig, strategy: Box<dyn Strategy>) -> Self {
        Self { config, strategy }
    }

    #[must_use]
    pub const fn config(&self) -> &ComputeConfig {
        &self.config
    }

    /// Name of the strategy in use.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Check `n` against the configured guardrails without computing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Validation`] for the first failing check.
    pub fn validate(&self, n: i64) -> Result<u64> {
        Ok(validation::validate(n, &self.config)?)
    }

    /// Validate and compute `n!`.
    ///
    /// # Errors
    ///
    /// Validation failures surface as [`crate::error::Error::Validation`];
    /// any strategy failure is wrapped as [`crate::error::Error::Computation`].
    pub fn compute_one(&self, n: i64) -> Result<BigUint> {
        let n = self.validate(n)?;
        self.compute_validated(n)
    }

    /// Compute every value in order, failing the whole batch on the first error.
    ///
    /// # Errors
    ///
    /// Returns the first validation or computation error encountered; no
    /// partial results are returned.
    pub fn compute_many<I>(&self, values: I) -> Result<Vec<Factorial>>
    where
        I: IntoIterator<Item = i64>,
    {
        values
            .into_iter()
            .map(|raw| {
                let n = self.validate(raw)?;
                Ok(Factorial::new(n, self.compute_validated(n)?))
            })
            .collect()
    }

    /// Time the computation for each `n` in `range`.
    ///
    /// # Errors
    ///
    /// Fails on the first sample that does not pass validation, or on an
    /// invalid step.
    pub fn bench_range(&self, range: BenchRange) -> Result<Vec<BenchmarkRecord>> {
        self.bench_range_with(range, |_| {})
    }

    /// Like [`Self::bench_range`], calling `on_record` after each sample.
    ///
    /// # Errors
    ///
    /// Same as [`Self::bench_range`].
    pub fn bench_range_with<F>(
        &self,
        range: BenchRange,
        mut on_record: F,
    ) -> Result<Vec<BenchmarkRecord>>
    where
        F: FnMut(&BenchmarkRecord),
    {
        let mut records = Vec::new();
        for raw in range.samples()? {
            let n = self.validate(raw)?;
            let started = Instant::now();
            let value = self.compute_validated(n)?;
            let seconds = started.elapsed().as_secs_f64();
            let record = BenchmarkRecord {
                n,
                digits: digit_count(&value),
                seconds,
                algorithm: self.strategy.name(),
            };
            on_record(&record);
            records.push(record);
        }
        Ok(records)
    }

    fn compute_validated(&self, n: u64) -> Result<BigUint> {
        self.strategy
            .compute(n)
            .map_err(|source| ComputationError::new(self.strategy.name(), n, source).into())
    }
}

impl Default for FactorialService {
    fn default() -> Self {
        Self::new(ComputeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::algorithm::Algorithm;
    use crate::domain::error::{StrategyFailure, ValidationError};
    use crate::error::Error;

    struct FailingStrategy;

    impl Strategy for FailingStrategy {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn compute(&self, _n: u64) -> std::result::Result<BigUint, StrategyFailure> {
            Err("boom".into())
        }
    }

    #[test]
    fn test_compute_one_base_cases_for_every_algorithm() {
        for algorithm in Algorithm::ALL {
            let service = FactorialService::new(ComputeConfig::default().with_algorithm(algorithm));
            assert_eq!(service.compute_one(0).unwrap(), BigUint::from(1u32));
            assert_eq!(service.compute_one(1).unwrap(), BigUint::from(1u32));
        }
    }

    #[test]
    fn test_compute_many_preserves_order() {
        let service = FactorialService::default();
        let pairs = service.compute_many([4, 3]).unwrap();
        assert_eq!(
            pairs,
            vec![
                Factorial::new(4, BigUint::from(24u32)),
                Factorial::new(3, BigUint::from(6u32)),
            ]
        );
    }

    #[test]
    fn test_compute_many_fails_whole_batch() {
        let service = FactorialService::default();
        let err = service.compute_many([3, -1, 4]).unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::Negative)));
    }

    #[test]
    fn test_strategy_failure_is_normalized() {
        let service =
            FactorialService::with_strategy(ComputeConfig::default(), Box::new(FailingStrategy));
        let err = service.compute_one(3).unwrap_err();
        match err {
            Error::Computation(inner) => {
                assert_eq!(inner.strategy, "failing");
                assert_eq!(inner.n, 3);
                assert_eq!(inner.to_string(), "failure during factorial computation");
            }
            other => panic!("expected computation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_runs_before_strategy() {
        let config = ComputeConfig::default().with_max_input(5);
        let service = FactorialService::with_strategy(config, Box::new(FailingStrategy));
        assert!(matches!(
            service.compute_one(6).unwrap_err(),
            Error::Validation(ValidationError::ExceedsMaximum { max: 5 })
        ));
    }

    #[test]
    fn test_bench_range_samples_inclusive_stop() {
        let service = FactorialService::default();
        let records = service.bench_range(BenchRange::new(1, 10, 3)).unwrap();
        let ns: Vec<u64> = records.iter().map(|r| r.n).collect();
        assert_eq!(ns, vec![1, 4, 7, 10]);
        assert_eq!(records[3].digits, 7);
        assert!(records.iter().all(|r| r.seconds >= 0.0));
        assert!(records.iter().all(|r| r.algorithm == "product"));
    }

    #[test]
    fn test_bench_range_propagates_validation() {
        let service = FactorialService::new(ComputeConfig::default().with_max_input(5));
        let err = service.bench_range(BenchRange::new(1, 10, 2)).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::ExceedsMaximum { max: 5 })
        ));
    }

    #[test]
    fn test_bench_range_with_reports_each_record() {
        let service = FactorialService::default();
        let mut seen = Vec::new();
        service
            .bench_range_with(BenchRange::new(2, 4, 1), |record| seen.push(record.n))
            .unwrap();
        assert_eq!(seen, vec![2, 3, 4]);
    }
}
