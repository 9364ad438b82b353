//! SA configuration and cooling schedules.

/// Smallest usable step fraction; keeps move widths away from
/// degenerate zero-width sampling ranges.
const MIN_STEP_SCALE: f64 = 1e-6;

/// Cooling schedule for temperature reduction.
#[derive(Debug, Clone, Copy)]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    ///
    /// Most widely used. Typical `alpha`: 0.9–0.99.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling over `max_iterations`:
    /// `T_k = T_0 - k * (T_0 - T_min) / max_steps`.
    Linear,
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

/// Configuration for the simulated-annealing strategy.
///
/// # Examples
///
/// ```
/// use designopt::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(10.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.98 })
///     .with_iterations_per_temperature(50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Minimum temperature. The run stops when T drops below this.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Number of candidate moves at each temperature level.
    pub iterations_per_temperature: usize,

    /// Maximum total moves (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Perturbation width at the initial temperature, as a fraction of
    /// each dimension's bound span. The actual width scales down with
    /// the temperature ratio `T / T_0`.
    pub step_scale: f64,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10.0,
            min_temperature: 1e-4,
            cooling: CoolingSchedule::default(),
            iterations_per_temperature: 100,
            max_iterations: 0,
            step_scale: 1.0,
        }
    }
}

impl SaConfig {
    /// Sets the initial temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the minimum temperature.
    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    /// Sets the cooling schedule.
    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Sets the number of moves per temperature level.
    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    /// Sets the hard move budget (0 to disable).
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the initial perturbation width as a span fraction, clamped
    /// to [1e-6, 1].
    pub fn with_step_scale(mut self, scale: f64) -> Self {
        self.step_scale = scale.clamp(MIN_STEP_SCALE, 1.0);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.iterations_per_temperature == 0 {
            return Err("iterations_per_temperature must be at least 1".into());
        }
        if !(MIN_STEP_SCALE..=1.0).contains(&self.step_scale) {
            return Err(format!(
                "step_scale must be in [{MIN_STEP_SCALE}, 1], got {}",
                self.step_scale
            ));
        }
        if let CoolingSchedule::Geometric { alpha } = self.cooling {
            if alpha <= 0.0 || alpha >= 1.0 {
                return Err(format!("geometric alpha must be in (0, 1), got {alpha}"));
            }
        }
        Ok(())
    }
}
