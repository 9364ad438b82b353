//! Simulated Annealing (SA) over box-constrained design vectors.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Perturbation size shrinks with the temperature, so
//! the search takes large exploratory steps early and fine adjustment
//! steps late; worsening moves are accepted with a probability that
//! decays as the system cools, letting the trajectory escape local
//! optima.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};

use crate::criteria::Criterion;
use crate::design::{Bounds, Design};
use crate::strategy::SearchStrategy;

/// Simulated-annealing search strategy.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAnnealing {
    config: SaConfig,
}

impl SimulatedAnnealing {
    /// Creates the strategy with explicit control parameters.
    pub fn new(config: SaConfig) -> Self {
        Self { config }
    }
}

impl SearchStrategy for SimulatedAnnealing {
    fn label(&self) -> &'static str {
        "simulated-annealing"
    }

    fn optimize(&self, objective: &dyn Criterion, bounds: &Bounds, seed: u64) -> Design {
        let result = SaRunner::run(objective, bounds, &self.config, seed);
        Design::new(result.best).expect("SA keeps candidates inside the unit box")
    }
}
