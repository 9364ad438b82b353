//! SA execution loop.

use super::config::{CoolingSchedule, SaConfig};
use crate::criteria::Criterion;
use crate::design::Bounds;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a simulated-annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best candidate found, inside the bounds.
    pub best: Vec<f64>,

    /// Criterion score of the best candidate.
    pub best_cost: f64,

    /// Total number of candidate moves evaluated.
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Best score after each temperature level.
    pub cost_history: Vec<f64>,
}

/// Executes the simulated-annealing loop.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from the given seed.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`SaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<C: Criterion + ?Sized>(
        objective: &C,
        bounds: &Bounds,
        config: &SaConfig,
        seed: u64,
    ) -> SaResult {
        config.validate().expect("invalid SaConfig");

        let mut rng = StdRng::seed_from_u64(seed);
        let dim = bounds.dim();

        let mut current = bounds.sample(&mut rng);
        let mut current_cost = objective.penalized_score(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let linear_max_steps = compute_linear_steps(config);
        let mut cost_history = vec![best_cost];
        let mut step = 0usize;

        'outer: while temperature > config.min_temperature {
            for _ in 0..config.iterations_per_temperature {
                if config.max_iterations > 0 && total_iterations >= config.max_iterations {
                    break 'outer;
                }

                // Single-coordinate move whose width shrinks with the
                // temperature ratio: broad early, fine-grained late.
                let i = rng.random_range(0..dim);
                let width =
                    config.step_scale * bounds.span(i) * (temperature / config.initial_temperature);
                let mut neighbor = current.clone();
                neighbor[i] = bounds.clamp(i, neighbor[i] + rng.random_range(-width..width));

                let neighbor_cost = objective.penalized_score(&neighbor);
                let delta = neighbor_cost - current_cost;

                // Metropolis acceptance criterion
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    let probability = (-delta / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                };

                if accept {
                    current = neighbor;
                    current_cost = neighbor_cost;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }
                }

                total_iterations += 1;
            }

            temperature = cool(temperature, config, step, linear_max_steps);
            step += 1;
            cost_history.push(best_cost);
        }

        SaResult {
            best,
            best_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        }
    }
}

/// Apply the cooling schedule to compute the next temperature.
fn cool(temperature: f64, config: &SaConfig, step: usize, linear_max_steps: usize) -> f64 {
    match config.cooling {
        CoolingSchedule::Geometric { alpha } => temperature * alpha,

        CoolingSchedule::Linear => {
            let t = config.initial_temperature
                - (step + 1) as f64 * (config.initial_temperature - config.min_temperature)
                    / linear_max_steps as f64;
            t.max(config.min_temperature)
        }
    }
}

/// Number of temperature steps for linear cooling.
fn compute_linear_steps(config: &SaConfig) -> usize {
    match config.cooling {
        CoolingSchedule::Linear => {
            if config.max_iterations > 0 {
                (config.max_iterations / config.iterations_per_temperature).max(1)
            } else {
                1000
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{AOptimality, DOptimality};

    #[test]
    fn test_sa_finds_near_d_optimal_design() {
        let bounds = Bounds::unit(10);
        let config = SaConfig::default();
        let result = SaRunner::run(&DOptimality, &bounds, &config, 42);

        // det tops out at n²/4 = 25 for n = 10, so the optimum is 0.04.
        assert!(
            result.best_cost < 0.08,
            "expected near-optimal D score, got {}",
            result.best_cost
        );
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves >= result.improving_moves);
    }

    #[test]
    fn test_sa_linear_cooling() {
        let bounds = Bounds::unit(10);
        let config = SaConfig::default()
            .with_cooling(CoolingSchedule::Linear)
            .with_max_iterations(20_000);
        let result = SaRunner::run(&DOptimality, &bounds, &config, 42);

        assert!(
            result.best_cost < 0.1,
            "expected near-optimal D score, got {}",
            result.best_cost
        );
    }

    #[test]
    fn test_sa_improves_on_a_optimality() {
        let bounds = Bounds::unit(20);
        let config = SaConfig::default();
        let result = SaRunner::run(&AOptimality, &bounds, &config, 7);

        // The 12/8 two-level design scores 28/96 ≈ 0.2917; a random
        // design sits well above 0.4.
        assert!(
            result.best_cost < 0.35,
            "expected A score near the two-level optimum, got {}",
            result.best_cost
        );
    }

    #[test]
    fn test_sa_deterministic_in_seed() {
        let bounds = Bounds::unit(8);
        let config = SaConfig::default().with_max_iterations(2000);
        let a = SaRunner::run(&DOptimality, &bounds, &config, 99);
        let b = SaRunner::run(&DOptimality, &bounds, &config, 99);

        assert_eq!(a.best, b.best);
        assert_eq!(a.best_cost, b.best_cost);
        assert_eq!(a.iterations, b.iterations);
    }

    #[test]
    fn test_sa_max_iterations_limit() {
        let bounds = Bounds::unit(5);
        let config = SaConfig::default()
            .with_iterations_per_temperature(10)
            .with_max_iterations(100);
        let result = SaRunner::run(&DOptimality, &bounds, &config, 42);

        assert!(
            result.iterations <= 100,
            "expected <= 100 iterations, got {}",
            result.iterations
        );
    }

    #[test]
    fn test_sa_cost_history_non_increasing() {
        let bounds = Bounds::unit(10);
        let config = SaConfig::default();
        let result = SaRunner::run(&DOptimality, &bounds, &config, 42);

        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_sa_respects_bounds() {
        let bounds = Bounds::new(vec![0.2; 6], vec![0.8; 6]).unwrap();
        let config = SaConfig::default().with_max_iterations(3000);
        let result = SaRunner::run(&DOptimality, &bounds, &config, 3);

        for (i, &x) in result.best.iter().enumerate() {
            assert!(
                x >= bounds.lower(i) && x <= bounds.upper(i),
                "coordinate {i} escaped bounds: {x}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "invalid SaConfig")]
    fn test_sa_panics_on_invalid_config() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        SaRunner::run(&DOptimality, &Bounds::unit(5), &config, 42);
    }
}
