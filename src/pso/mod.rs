//! Particle Swarm Optimization (PSO) over box-constrained design vectors.
//!
//! A population metaheuristic: a swarm of candidate points moves through
//! the search box, each particle's velocity pulled toward its own best
//! position so far and the swarm's global best. Convergence to the true
//! optimum is not guaranteed; the swarm settles wherever the best basin
//! it sampled leads.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Clerc & Kennedy (2002), "The Particle Swarm — Explosion, Stability,
//!   and Convergence in a Multidimensional Complex Space"

mod config;
mod runner;

pub use config::PsoConfig;
pub use runner::{PsoResult, PsoRunner};

use crate::criteria::Criterion;
use crate::design::{Bounds, Design};
use crate::strategy::SearchStrategy;

/// Particle-swarm search strategy.
#[derive(Debug, Clone, Default)]
pub struct ParticleSwarm {
    config: PsoConfig,
}

impl ParticleSwarm {
    /// Creates the strategy with explicit control parameters.
    pub fn new(config: PsoConfig) -> Self {
        Self { config }
    }
}

impl SearchStrategy for ParticleSwarm {
    fn label(&self) -> &'static str {
        "particle-swarm"
    }

    fn optimize(&self, objective: &dyn Criterion, bounds: &Bounds, seed: u64) -> Design {
        let result = PsoRunner::run(objective, bounds, &self.config, seed);
        Design::new(result.best).expect("PSO keeps candidates inside the unit box")
    }
}
