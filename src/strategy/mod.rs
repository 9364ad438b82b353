//! Polymorphic search interface.
//!
//! Every search algorithm in this crate is exposed through
//! [`SearchStrategy`]: one seeded call, one design out. Control
//! parameters live in each strategy's explicit config struct, never in
//! ambient defaults, and all randomness flows from the per-call seed so
//! runs are reproducible and independent.

use crate::criteria::Criterion;
use crate::design::{Bounds, Design};

/// A seeded, box-constrained stochastic search.
///
/// Implementations are stochastic but deterministic in the seed: the same
/// `objective`, `bounds`, and `seed` always produce the same design. None
/// of them guarantee the global optimum; returning a suboptimal design is
/// a valid outcome, not an error.
pub trait SearchStrategy: Send + Sync {
    /// Short name for reports, e.g. `"particle-swarm"`.
    fn label(&self) -> &'static str;

    /// Runs one search and returns the best design found.
    fn optimize(&self, objective: &dyn Criterion, bounds: &Bounds, seed: u64) -> Design;
}
