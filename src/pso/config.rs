//! PSO configuration.

/// Smallest usable velocity-cap fraction; keeps initial velocity
/// sampling away from degenerate zero-width ranges.
const MIN_VELOCITY_FRACTION: f64 = 1e-6;

/// Configuration for the particle-swarm strategy.
///
/// Defaults use the constriction-style coefficients from Clerc & Kennedy
/// (inertia 0.729, acceleration 1.49445 each), which keep the swarm from
/// diverging without velocity damping tricks.
///
/// # Examples
///
/// ```
/// use designopt::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_swarm_size(40)
///     .with_max_iterations(300)
///     .with_stagnation_limit(50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PsoConfig {
    /// Number of particles in the swarm.
    pub swarm_size: usize,

    /// Maximum number of swarm iterations.
    pub max_iterations: usize,

    /// Inertia weight applied to the previous velocity.
    pub inertia: f64,

    /// Pull toward each particle's personal best.
    pub cognitive: f64,

    /// Pull toward the swarm's global best.
    pub social: f64,

    /// Velocity cap per dimension, as a fraction of the bound span.
    pub max_velocity_fraction: f64,

    /// Iterations with no global-best improvement before stopping.
    /// 0 disables stagnation-based termination.
    pub stagnation_limit: usize,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            swarm_size: 30,
            max_iterations: 400,
            inertia: 0.729,
            cognitive: 1.49445,
            social: 1.49445,
            max_velocity_fraction: 0.5,
            stagnation_limit: 0,
        }
    }
}

impl PsoConfig {
    /// Sets the swarm size.
    pub fn with_swarm_size(mut self, n: usize) -> Self {
        self.swarm_size = n;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the inertia weight.
    pub fn with_inertia(mut self, w: f64) -> Self {
        self.inertia = w;
        self
    }

    /// Sets the cognitive (personal-best) coefficient.
    pub fn with_cognitive(mut self, c: f64) -> Self {
        self.cognitive = c;
        self
    }

    /// Sets the social (global-best) coefficient.
    pub fn with_social(mut self, c: f64) -> Self {
        self.social = c;
        self
    }

    /// Sets the velocity cap as a span fraction, clamped to [1e-6, 1].
    pub fn with_max_velocity_fraction(mut self, fraction: f64) -> Self {
        self.max_velocity_fraction = fraction.clamp(MIN_VELOCITY_FRACTION, 1.0);
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.swarm_size < 2 {
            return Err("swarm_size must be at least 2".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.inertia < 0.0 || self.inertia >= 1.0 {
            return Err(format!("inertia must be in [0, 1), got {}", self.inertia));
        }
        if self.cognitive < 0.0 || self.social < 0.0 {
            return Err("cognitive and social coefficients must be non-negative".into());
        }
        if self.cognitive + self.social == 0.0 {
            return Err("at least one of cognitive/social must be positive".into());
        }
        if !(MIN_VELOCITY_FRACTION..=1.0).contains(&self.max_velocity_fraction) {
            return Err(format!(
                "max_velocity_fraction must be in [{MIN_VELOCITY_FRACTION}, 1], got {}",
                self.max_velocity_fraction
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PsoConfig::default();
        assert_eq!(config.swarm_size, 30);
        assert_eq!(config.max_iterations, 400);
        assert!((config.inertia - 0.729).abs() < 1e-10);
        assert!((config.cognitive - 1.49445).abs() < 1e-10);
        assert!((config.social - 1.49445).abs() < 1e-10);
        assert_eq!(config.stagnation_limit, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PsoConfig::default()
            .with_swarm_size(50)
            .with_max_iterations(100)
            .with_inertia(0.6)
            .with_cognitive(2.0)
            .with_social(1.0)
            .with_max_velocity_fraction(0.25)
            .with_stagnation_limit(20);
        assert_eq!(config.swarm_size, 50);
        assert_eq!(config.max_iterations, 100);
        assert!((config.inertia - 0.6).abs() < 1e-10);
        assert!((config.cognitive - 2.0).abs() < 1e-10);
        assert!((config.social - 1.0).abs() < 1e-10);
        assert!((config.max_velocity_fraction - 0.25).abs() < 1e-10);
        assert_eq!(config.stagnation_limit, 20);
    }

    #[test]
    fn test_validate_swarm_too_small() {
        assert!(PsoConfig::default().with_swarm_size(1).validate().is_err());
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(PsoConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_inertia() {
        assert!(PsoConfig::default().with_inertia(1.0).validate().is_err());
        assert!(PsoConfig::default().with_inertia(-0.1).validate().is_err());
    }

    #[test]
    fn test_validate_zero_pull() {
        let config = PsoConfig::default().with_cognitive(0.0).with_social(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_velocity_fraction_clamped() {
        let config = PsoConfig::default().with_max_velocity_fraction(4.0);
        assert!((config.max_velocity_fraction - 1.0).abs() < 1e-10);

        // Denormal-tiny fractions are floored, not passed through.
        let config = PsoConfig::default().with_max_velocity_fraction(1e-300);
        assert!((config.max_velocity_fraction - 1e-6).abs() < 1e-18);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_tiny_velocity_fraction() {
        let mut config = PsoConfig::default();
        config.max_velocity_fraction = 1e-300;
        assert!(config.validate().is_err());
        config.max_velocity_fraction = 0.0;
        assert!(config.validate().is_err());
    }
}
