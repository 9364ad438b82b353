//! GA evolutionary loop execution.

use super::config::GaConfig;
use crate::criteria::Criterion;
use crate::design::Bounds;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One individual: a design vector and its score.
#[derive(Debug, Clone)]
struct Individual {
    genes: Vec<f64>,
    cost: f64,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best design vector found during the entire run.
    pub best: Vec<f64>,

    /// Criterion score of the best vector.
    pub best_cost: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether terminated early due to stagnation.
    pub stagnated: bool,

    /// Best score after each generation (index 0 is the initial
    /// population's best).
    pub cost_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA from the given seed.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<C: Criterion + ?Sized>(
        objective: &C,
        bounds: &Bounds,
        config: &GaConfig,
        seed: u64,
    ) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let mut rng = StdRng::seed_from_u64(seed);

        // Initialize and evaluate the population.
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| {
                let genes = bounds.sample(&mut rng);
                let cost = objective.penalized_score(&genes);
                Individual { genes, cost }
            })
            .collect();

        sort_by_cost(&mut population);

        let mut best = population[0].clone();
        let mut cost_history = Vec::with_capacity(config.max_generations + 1);
        cost_history.push(best.cost);

        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut generations = 0usize;

        for _ in 0..config.max_generations {
            let elite_count = (config.population_size as f64 * config.elite_ratio) as usize;
            let mut next_gen: Vec<Individual> = population[..elite_count].to_vec();

            while next_gen.len() < config.population_size {
                let p1 = tournament(&population, config.tournament_size, &mut rng);
                let p2 = tournament(&population, config.tournament_size, &mut rng);

                let mut genes = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    blend_crossover(
                        &population[p1].genes,
                        &population[p2].genes,
                        config.blend_alpha,
                        bounds,
                        &mut rng,
                    )
                } else {
                    population[p1].genes.clone()
                };

                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    mutate(&mut genes, config.mutation_span, bounds, &mut rng);
                }

                let cost = objective.penalized_score(&genes);
                next_gen.push(Individual { genes, cost });
            }

            sort_by_cost(&mut next_gen);
            population = next_gen;
            generations += 1;

            if population[0].cost < best.cost {
                best = population[0].clone();
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            cost_history.push(best.cost);

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        GaResult {
            best: best.genes,
            best_cost: best.cost,
            generations,
            stagnated,
            cost_history,
        }
    }
}

fn sort_by_cost(population: &mut [Individual]) {
    population.sort_by(|a, b| {
        a.cost
            .partial_cmp(&b.cost)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Tournament selection: pick k random individuals, return the best index.
fn tournament<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    let n = population.len();
    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].cost < population[best_idx].cost {
            best_idx = idx;
        }
    }
    best_idx
}

/// BLX-α: each offspring gene is drawn uniformly from the parents'
/// interval widened by `alpha` times its width, then clamped to bounds.
fn blend_crossover<R: Rng>(
    p1: &[f64],
    p2: &[f64],
    alpha: f64,
    bounds: &Bounds,
    rng: &mut R,
) -> Vec<f64> {
    p1.iter()
        .zip(p2.iter())
        .enumerate()
        .map(|(i, (&a, &b))| {
            let lo = a.min(b);
            let hi = a.max(b);
            let range = hi - lo;
            if range < 1e-15 {
                lo
            } else {
                bounds.clamp(i, rng.random_range((lo - alpha * range)..(hi + alpha * range)))
            }
        })
        .collect()
}

/// Perturbs one random coordinate within `span` × its bound width.
fn mutate<R: Rng>(genes: &mut [f64], span: f64, bounds: &Bounds, rng: &mut R) {
    let i = rng.random_range(0..genes.len());
    let width = span * bounds.span(i);
    genes[i] = bounds.clamp(i, genes[i] + rng.random_range(-width..width));
}
