//! GA configuration.

/// Configuration for the genetic algorithm.
///
/// # Builder Pattern
///
/// ```
/// use packtour::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_elite_ratio(0.5)
///     .with_mutation_rate(0.3)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run. There is no convergence detection.
    pub max_generations: usize,

    /// Fraction of the population preserved unchanged each generation
    /// (0.0–1.0). When positive, parents are drawn from the elite pool;
    /// at 0.0 the whole population is replaced and parents are drawn from
    /// the full population.
    pub elite_ratio: f64,

    /// Probability of mutating an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            elite_ratio: 0.5,
            mutation_rate: 0.3,
            seed: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elite individuals for this configuration.
    pub(crate) fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio) as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.elite_count() >= self.population_size {
            return Err("elite_ratio too high: elites fill entire population".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 500);
        assert!((config.elite_ratio - 0.5).abs() < 1e-10);
        assert!((config.mutation_rate - 0.3).abs() < 1e-10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(1000)
            .with_elite_ratio(0.2)
            .with_mutation_rate(0.05)
            .with_seed(42);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.max_generations, 1000);
        assert!((config.elite_ratio - 0.2).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_elite_ratio(1.5)
            .with_mutation_rate(-0.5);
        assert!((config.elite_ratio - 1.0).abs() < 1e-10);
        assert!((config.mutation_rate - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_population_too_small() {
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        assert!(GaConfig::default().with_max_generations(0).validate().is_err());
    }

    #[test]
    fn test_validate_elite_too_high() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elite_ratio(1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_elite_ratio_is_valid() {
        assert!(GaConfig::default().with_elite_ratio(0.0).validate().is_ok());
    }

    #[test]
    fn test_elite_count_rounds_down() {
        let config = GaConfig::default()
            .with_population_size(7)
            .with_elite_ratio(0.5);
        assert_eq!(config.elite_count(), 3);
    }
}
