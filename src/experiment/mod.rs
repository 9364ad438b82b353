//! Repeated seeded runs and convergence summaries.
//!
//! Stochastic strategies are compared by distribution, not by a single
//! run: [`ExperimentRunner::run_many`] executes one search per seed and
//! [`Summary`] counts how often each (sorted, rounded) design shows up.
//! A strategy that lands on the same design for 38 of 40 seeds has
//! converged by consensus; one that scatters has not.

use crate::criteria::{Criterion, CriterionError};
use crate::design::{Bounds, Design};
use crate::strategy::SearchStrategy;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

/// Consecutive seeds starting at `base`, the default seed source for
/// repeated runs.
pub fn seed_sequence(base: u64, count: usize) -> Vec<u64> {
    (0..count as u64).map(|i| base.wrapping_add(i)).collect()
}

/// Outcome of one seeded search run. Immutable once recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// The design found, in sorted (canonical) order.
    pub design: Design,

    /// The design's score under the experiment's criterion.
    pub score: f64,

    /// Label of the strategy that produced the design.
    pub strategy: &'static str,

    /// Label of the criterion the strategy optimized.
    pub criterion: &'static str,

    /// The seed this run was started from.
    pub seed: u64,
}

/// Configuration for repeated experiment runs.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Decimal places used when rounding designs for the summary.
    pub round_decimals: u32,

    /// Whether to execute the per-seed runs on the rayon thread pool.
    /// Runs are independent, so parallel and sequential execution
    /// produce identical results in seed order.
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            round_decimals: 2,
            parallel: false,
        }
    }
}

impl ExperimentConfig {
    /// Sets the summary rounding precision.
    pub fn with_round_decimals(mut self, decimals: u32) -> Self {
        self.round_decimals = decimals;
        self
    }

    /// Enables or disables parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        // Past 12 decimals the integer signature overflows nothing but
        // stops being a meaningful rounding.
        if self.round_decimals > 12 {
            return Err(format!(
                "round_decimals must be at most 12, got {}",
                self.round_decimals
            ));
        }
        Ok(())
    }
}

/// Executes repeated seeded runs of one strategy against one criterion.
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Runs the strategy once per seed and records each outcome.
    ///
    /// Every design is sorted into canonical order and re-scored by the
    /// criterion; a [`CriterionError::SingularMatrix`] from that final
    /// scoring propagates — a strategy returning a degenerate design is
    /// a caller-visible failure, not something to paper over.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`ExperimentConfig::validate`] first to get a descriptive error).
    pub fn run_many(
        strategy: &dyn SearchStrategy,
        objective: &dyn Criterion,
        bounds: &Bounds,
        seeds: &[u64],
        config: &ExperimentConfig,
    ) -> Result<Vec<RunResult>, CriterionError> {
        config.validate().expect("invalid ExperimentConfig");

        let run_one = |seed: u64| -> Result<RunResult, CriterionError> {
            let design = strategy.optimize(objective, bounds, seed).sorted();
            let score = objective.score(design.values())?;
            Ok(RunResult {
                design,
                score,
                strategy: strategy.label(),
                criterion: objective.label(),
                seed,
            })
        };

        if config.parallel {
            seeds.par_iter().map(|&seed| run_one(seed)).collect()
        } else {
            seeds.iter().map(|&seed| run_one(seed)).collect()
        }
    }

    /// Summarizes results at the precision the experiment was
    /// configured with.
    pub fn summarize(results: &[RunResult], config: &ExperimentConfig) -> Summary {
        Summary::from_results(results, config.round_decimals)
    }
}

/// Frequency table over the (sorted, rounded) designs of repeated runs.
#[derive(Debug, Clone)]
pub struct Summary {
    counts: BTreeMap<Vec<i64>, usize>,
    round_decimals: u32,
    total: usize,
}

impl Summary {
    /// Counts results by their rounded design signature.
    pub fn from_results(results: &[RunResult], round_decimals: u32) -> Self {
        let mut counts: BTreeMap<Vec<i64>, usize> = BTreeMap::new();
        for result in results {
            *counts
                .entry(result.design.signature(round_decimals))
                .or_insert(0) += 1;
        }
        Self {
            counts,
            round_decimals,
            total: results.len(),
        }
    }

    /// Total number of runs counted. Equals the sum of all frequencies.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct rounded designs observed.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// The most frequent rounded design and its count, ties broken by
    /// design order.
    pub fn most_common(&self) -> Option<(Vec<f64>, usize)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(key, &count)| (self.key_to_values(key), count))
    }

    /// Iterates over `(design values, count)` entries in design order.
    pub fn entries(&self) -> impl Iterator<Item = (Vec<f64>, usize)> + '_ {
        self.counts
            .iter()
            .map(|(key, &count)| (self.key_to_values(key), count))
    }

    fn key_to_values(&self, key: &[i64]) -> Vec<f64> {
        let scale = 10f64.powi(self.round_decimals as i32);
        key.iter().map(|&k| k as f64 / scale).collect()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} runs, {} distinct designs (rounded to {} dp)",
            self.total,
            self.distinct(),
            self.round_decimals
        )?;

        // Highest frequency first; equal counts fall back to design order.
        let mut entries: Vec<(&Vec<i64>, usize)> =
            self.counts.iter().map(|(k, &c)| (k, c)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

        let precision = self.round_decimals as usize;
        for (key, count) in entries {
            let rendered: Vec<String> = self
                .key_to_values(key)
                .iter()
                .map(|v| format!("{v:.precision$}"))
                .collect();
            writeln!(f, "{count:>6} x [{}]", rendered.join(", "))?;
        }
        Ok(())
    }
}
