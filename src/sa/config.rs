//! SA configuration and cooling schedules.

/// Cooling schedule for temperature reduction.
#[derive(Debug, Clone, Copy)]
pub enum CoolingSchedule {
    /// Geometric cooling: `T_{k+1} = alpha * T_k`.
    ///
    /// Typical `alpha`: 0.95–0.99. Used by the touring runs.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling: `T_{k+1} = T_k - step`.
    ///
    /// A fixed decrement per iteration. Used by the knapsack runs, where
    /// `step` corresponds to `1 - cooling_rate` of that parameterization.
    Linear {
        /// Temperature decrement per iteration. Must be positive.
        step: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.99 }
    }
}

impl CoolingSchedule {
    /// Applies one cooling step.
    pub fn cool(&self, temperature: f64) -> f64 {
        match *self {
            CoolingSchedule::Geometric { alpha } => temperature * alpha,
            CoolingSchedule::Linear { step } => temperature - step,
        }
    }
}

/// Configuration for the simulated annealing driver.
///
/// # Examples
///
/// ```
/// use packtour::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.1)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.99 });
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Temperature floor. The run stops when T drops to or below this.
    pub min_temperature: f64,

    /// Cooling schedule, applied once per iteration.
    pub cooling: CoolingSchedule,

    /// Hard iteration budget. 0 = no limit (the floor terminates the run).
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 0.1,
            cooling: CoolingSchedule::default(),
            max_iterations: 0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
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
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature < 0.0 {
            return Err("min_temperature must be non-negative".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if alpha <= 0.0 || alpha >= 1.0 {
                    return Err(format!("geometric alpha must be in (0, 1), got {alpha}"));
                }
            }
            CoolingSchedule::Linear { step } => {
                if step <= 0.0 {
                    return Err(format!("linear step must be positive, got {step}"));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 100.0).abs() < 1e-10);
        assert!((config.min_temperature - 0.1).abs() < 1e-10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cooling_steps() {
        let geometric = CoolingSchedule::Geometric { alpha: 0.5 };
        assert!((geometric.cool(10.0) - 5.0).abs() < 1e-12);

        let linear = CoolingSchedule::Linear { step: 0.5 };
        assert!((linear.cool(10.0) - 9.5).abs() < 1e-12);
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(1.0)
            .with_min_temperature(2.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.5 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_step() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Linear { step: 0.0 });
        assert!(config.validate().is_err());
    }
}
