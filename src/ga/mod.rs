//! Real-coded Genetic Algorithm (GA) over box-constrained design vectors.
//!
//! A population metaheuristic: tournament selection picks parents,
//! blend (BLX-α) crossover recombines them, coordinate mutation perturbs
//! offspring, and elitism carries the best individuals forward unchanged.
//! Like the other strategies, convergence to the true optimum is not
//! guaranteed.
//!
//! # References
//!
//! - Holland (1975), "Adaptation in Natural and Artificial Systems"
//! - Eshelman & Schaffer (1993), "Real-Coded Genetic Algorithms and
//!   Interval-Schemata" (BLX-α)

mod config;
mod runner;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};

use crate::criteria::Criterion;
use crate::design::{Bounds, Design};
use crate::strategy::SearchStrategy;

/// Genetic-algorithm search strategy.
#[derive(Debug, Clone, Default)]
pub struct GeneticAlgorithm {
    config: GaConfig,
}

impl GeneticAlgorithm {
    /// Creates the strategy with explicit control parameters.
    pub fn new(config: GaConfig) -> Self {
        Self { config }
    }
}

impl SearchStrategy for GeneticAlgorithm {
    fn label(&self) -> &'static str {
        "genetic-algorithm"
    }

    fn optimize(&self, objective: &dyn Criterion, bounds: &Bounds, seed: u64) -> Design {
        let result = GaRunner::run(objective, bounds, &self.config, seed);
        Design::new(result.best).expect("GA keeps candidates inside the unit box")
    }
}
