//! Hill climbing configuration.

/// Configuration for the hill climbing driver.
///
/// Two termination criteria are supported and may be combined:
///
/// - `max_stalls`: stop after this many consecutive non-improving steps
///   (the counter resets whenever the current solution improves),
/// - `max_iterations`: stop after a fixed number of steps.
///
/// Either may be 0 to disable it, but not both.
#[derive(Debug, Clone)]
pub struct HcConfig {
    /// Consecutive non-improving steps tolerated before stopping. 0 = disabled.
    pub max_stalls: usize,

    /// Hard step budget. 0 = disabled.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            max_stalls: 1000,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl HcConfig {
    pub fn with_max_stalls(mut self, n: usize) -> Self {
        self.max_stalls = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_stalls == 0 && self.max_iterations == 0 {
            return Err("at least one of max_stalls and max_iterations must be set".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HcConfig::default();
        assert_eq!(config.max_stalls, 1000);
        assert_eq!(config.max_iterations, 0);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = HcConfig::default()
            .with_max_stalls(50)
            .with_max_iterations(500)
            .with_seed(42);
        assert_eq!(config.max_stalls, 50);
        assert_eq!(config.max_iterations, 500);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_no_termination() {
        let config = HcConfig::default().with_max_stalls(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_iteration_budget_alone() {
        let config = HcConfig::default()
            .with_max_stalls(0)
            .with_max_iterations(100);
        assert!(config.validate().is_ok());
    }
}
