//! PSO execution loop.

use super::config::PsoConfig;
use crate::criteria::Criterion;
use crate::design::Bounds;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One particle: position, velocity, and personal best.
#[derive(Debug, Clone)]
struct Particle {
    position: Vec<f64>,
    velocity: Vec<f64>,
    best_position: Vec<f64>,
    best_cost: f64,
}

/// Result of a particle-swarm run.
#[derive(Debug, Clone)]
pub struct PsoResult {
    /// The best position found by any particle.
    pub best: Vec<f64>,

    /// Criterion score of the best position.
    pub best_cost: f64,

    /// Number of swarm iterations executed.
    pub iterations: usize,

    /// Whether terminated early due to stagnation.
    pub stagnated: bool,

    /// Global-best score after each iteration.
    pub cost_history: Vec<f64>,
}

/// Executes the particle-swarm loop.
pub struct PsoRunner;

impl PsoRunner {
    /// Runs PSO from the given seed.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`PsoConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<C: Criterion + ?Sized>(
        objective: &C,
        bounds: &Bounds,
        config: &PsoConfig,
        seed: u64,
    ) -> PsoResult {
        config.validate().expect("invalid PsoConfig");

        let mut rng = StdRng::seed_from_u64(seed);
        let dim = bounds.dim();

        // Initialize swarm: uniform positions, velocities up to half the
        // allowed cap in either direction.
        let mut swarm: Vec<Particle> = (0..config.swarm_size)
            .map(|_| {
                let position = bounds.sample(&mut rng);
                let velocity: Vec<f64> = (0..dim)
                    .map(|i| {
                        let cap = config.max_velocity_fraction * bounds.span(i);
                        rng.random_range(-cap / 2.0..cap / 2.0)
                    })
                    .collect();
                let cost = objective.penalized_score(&position);
                Particle {
                    best_position: position.clone(),
                    best_cost: cost,
                    position,
                    velocity,
                }
            })
            .collect();

        let (mut best, mut best_cost) = global_best(&swarm);
        let mut cost_history = vec![best_cost];
        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut iterations = 0usize;

        for _ in 0..config.max_iterations {
            for particle in &mut swarm {
                for i in 0..dim {
                    let r_cognitive: f64 = rng.random_range(0.0..1.0);
                    let r_social: f64 = rng.random_range(0.0..1.0);

                    let mut v = config.inertia * particle.velocity[i]
                        + config.cognitive
                            * r_cognitive
                            * (particle.best_position[i] - particle.position[i])
                        + config.social * r_social * (best[i] - particle.position[i]);

                    let cap = config.max_velocity_fraction * bounds.span(i);
                    v = v.clamp(-cap, cap);

                    let raw = particle.position[i] + v;
                    let clamped = bounds.clamp(i, raw);
                    // A particle pinned to a wall keeps drifting outward
                    // forever unless its velocity is reset there.
                    particle.velocity[i] = if clamped == raw { v } else { 0.0 };
                    particle.position[i] = clamped;
                }

                let cost = objective.penalized_score(&particle.position);
                if cost < particle.best_cost {
                    particle.best_cost = cost;
                    particle.best_position = particle.position.clone();
                }
            }

            iterations += 1;

            let (iter_best, iter_best_cost) = global_best(&swarm);
            if iter_best_cost < best_cost {
                best = iter_best;
                best_cost = iter_best_cost;
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            cost_history.push(best_cost);

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        PsoResult {
            best,
            best_cost,
            iterations,
            stagnated,
            cost_history,
        }
    }
}

/// Best personal-best across the swarm.
fn global_best(swarm: &[Particle]) -> (Vec<f64>, f64) {
    let best = swarm
        .iter()
        .min_by(|a, b| {
            a.best_cost
                .partial_cmp(&b.best_cost)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("swarm must not be empty");
    (best.best_position.clone(), best.best_cost)
}
