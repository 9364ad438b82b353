//! GA configuration.

/// Smallest usable mutation fraction; keeps perturbation widths away
/// from degenerate zero-width sampling ranges.
const MIN_MUTATION_SPAN: f64 = 1e-6;

/// Configuration for the genetic-algorithm strategy.
///
/// # Examples
///
/// ```
/// use designopt::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_tournament_size(4)
///     .with_mutation_rate(0.3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Tournament size for parent selection. Higher = stronger
    /// selection pressure.
    pub tournament_size: usize,

    /// Fraction of the population preserved unchanged as elites (0.0–1.0).
    pub elite_ratio: f64,

    /// Probability of applying blend crossover to a pair of parents.
    /// When skipped, the first parent is cloned.
    pub crossover_rate: f64,

    /// BLX-α blend width: offspring genes are drawn from the parents'
    /// interval extended by this fraction of its width on both sides.
    pub blend_alpha: f64,

    /// Probability of mutating an offspring.
    pub mutation_rate: f64,

    /// Mutation width per coordinate, as a fraction of the bound span.
    pub mutation_span: f64,

    /// Generations with no improvement before stopping. 0 disables
    /// stagnation-based termination.
    pub stagnation_limit: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 200,
            tournament_size: 3,
            elite_ratio: 0.1,
            crossover_rate: 0.9,
            blend_alpha: 0.5,
            mutation_rate: 0.3,
            mutation_span: 0.1,
            stagnation_limit: 0,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the elite ratio, clamped to [0, 1].
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate, clamped to [0, 1].
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the BLX-α blend width.
    pub fn with_blend_alpha(mut self, alpha: f64) -> Self {
        self.blend_alpha = alpha.max(0.0);
        self
    }

    /// Sets the mutation rate, clamped to [0, 1].
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation width as a span fraction, clamped to [1e-6, 1].
    pub fn with_mutation_span(mut self, span: f64) -> Self {
        self.mutation_span = span.clamp(MIN_MUTATION_SPAN, 1.0);
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        let elite_count = (self.population_size as f64 * self.elite_ratio) as usize;
        if elite_count >= self.population_size {
            return Err("elite_ratio too high: elites fill entire population".into());
        }
        if !(MIN_MUTATION_SPAN..=1.0).contains(&self.mutation_span) {
            return Err(format!(
                "mutation_span must be in [{MIN_MUTATION_SPAN}, 1], got {}",
                self.mutation_span
            ));
        }
        Ok(())
    }
}
