//! Annealing configuration.

/// Configuration for a simulated-annealing run.
///
/// All parameters are defaulted; a default-constructed config is valid.
///
/// # Examples
///
/// ```
/// use tour_anneal::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling_rate(0.99)
///     .with_iterations(5_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingConfig {
    /// Initial temperature. Higher values allow more uphill exploration
    /// early in the run. Must be positive.
    pub initial_temperature: f64,

    /// Multiplicative temperature decay applied every iteration.
    /// Must be in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Fixed iteration budget. Zero iterations returns the seed tour
    /// unchanged.
    pub iterations: usize,

    /// Seed for the run-local random stream. `None` draws a fresh entropy
    /// seed; two runs with the same `Some` seed and parameters reproduce
    /// identical trajectories.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.995,
            iterations: 20_000,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
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
        let config = AnnealingConfig::default();
        assert!((config.initial_temperature - 100.0).abs() < 1e-10);
        assert!((config.cooling_rate - 0.995).abs() < 1e-10);
        assert_eq!(config.iterations, 20_000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = AnnealingConfig::default().with_initial_temperature(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        for rate in [0.0, 1.0, -0.5, 1.5] {
            let config = AnnealingConfig::default().with_cooling_rate(rate);
            assert!(config.validate().is_err(), "rate {rate} should be rejected");
        }
    }

    #[test]
    fn test_builder_chain() {
        let config = AnnealingConfig::default()
            .with_initial_temperature(10.0)
            .with_cooling_rate(0.9)
            .with_iterations(100)
            .with_seed(7);
        assert_eq!(config.iterations, 100);
        assert_eq!(config.seed, Some(7));
    }
}
