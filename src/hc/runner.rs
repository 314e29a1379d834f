//! Hill climbing execution loop.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::HcConfig;
use crate::error::Result;
use crate::search::{best_of_batch, SearchProblem};

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct HcResult<S: Clone> {
    /// The best solution found during the entire run.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Number of steps (neighborhood batches) executed.
    pub iterations: usize,

    /// Whether the run ended by exhausting the stall budget rather than
    /// the iteration budget.
    pub stalled: bool,
}

/// Executes the hill climbing algorithm.
pub struct HcRunner;

impl HcRunner {
    /// Runs greedy ascent until a termination criterion fires.
    ///
    /// A candidate replaces the current solution only when it strictly
    /// improves the *current* cost; the best-ever solution is tracked
    /// separately so a stalled excursion can never regress the answer.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`HcConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P: SearchProblem>(problem: &P, config: &HcConfig) -> Result<HcResult<P::Solution>> {
        config.validate().expect("invalid HcConfig");

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));

        let mut current = problem.initial_solution(&mut rng)?;
        let mut current_cost = problem.cost(&current)?;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut stalls = 0usize;
        let mut iterations = 0usize;
        let mut stalled = false;

        loop {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }

            let batch = problem.neighborhood(&current, &mut rng)?;
            let Some((candidate, candidate_cost)) = best_of_batch(problem, batch)? else {
                break;
            };
            iterations += 1;

            if candidate_cost < current_cost {
                current = candidate;
                current_cost = candidate_cost;
                stalls = 0;

                if current_cost < best_cost {
                    log::debug!("hill climbing: new best {best_cost:.4} -> {current_cost:.4}");
                    best = current.clone();
                    best_cost = current_cost;
                }
            } else {
                stalls += 1;
                if config.max_stalls > 0 && stalls > config.max_stalls {
                    stalled = true;
                    break;
                }
            }
        }

        Ok(HcResult {
            best,
            best_cost,
            iterations,
            stalled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    // ---- Quadratic minimization: f(x) = x^2, minimum at 0 ----

    struct QuadraticProblem;

    impl SearchProblem for QuadraticProblem {
        type Solution = f64;

        fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<f64> {
            Ok(rng.random_range(-10.0..10.0))
        }

        fn cost(&self, x: &f64) -> Result<f64> {
            Ok(x * x)
        }

        fn neighborhood<R: Rng>(&self, x: &f64, rng: &mut R) -> Result<Vec<f64>> {
            Ok((0..10).map(|_| x + rng.random_range(-1.0..1.0)).collect())
        }
    }

    #[test]
    fn test_quadratic_descent() {
        let config = HcConfig::default().with_max_stalls(100).with_seed(42);
        let result = HcRunner::run(&QuadraticProblem, &config).unwrap();
        assert!(
            result.best_cost < 0.1,
            "expected near-zero cost, got {}",
            result.best_cost
        );
        assert!(result.stalled);
    }

    #[test]
    fn test_iteration_budget() {
        let config = HcConfig::default()
            .with_max_stalls(0)
            .with_max_iterations(25)
            .with_seed(42);
        let result = HcRunner::run(&QuadraticProblem, &config).unwrap();
        assert_eq!(result.iterations, 25);
        assert!(!result.stalled);
    }

    #[test]
    fn test_deterministic_given_seed() {
        let config = HcConfig::default().with_max_stalls(50).with_seed(7);
        let a = HcRunner::run(&QuadraticProblem, &config).unwrap();
        let b = HcRunner::run(&QuadraticProblem, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_cost, b.best_cost);
        assert_eq!(a.iterations, b.iterations);
    }

    // Tracks every best_cost the runner would report if stopped early, by
    // re-running with growing iteration budgets.
    #[test]
    fn test_best_never_regresses_across_budgets() {
        let mut previous = f64::INFINITY;
        for budget in [5, 10, 20, 40, 80] {
            let config = HcConfig::default()
                .with_max_stalls(0)
                .with_max_iterations(budget)
                .with_seed(3);
            let result = HcRunner::run(&QuadraticProblem, &config).unwrap();
            assert!(
                result.best_cost <= previous + 1e-12,
                "best cost regressed: {} > {}",
                result.best_cost,
                previous
            );
            previous = result.best_cost;
        }
    }

    // ---- Cost error propagation ----

    struct FailingProblem;

    impl SearchProblem for FailingProblem {
        type Solution = ();

        fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Result<()> {
            Ok(())
        }

        fn cost(&self, _s: &()) -> Result<f64> {
            Err(crate::error::Error::missing_edge("a", "b"))
        }

        fn neighborhood<R: Rng>(&self, _s: &(), _rng: &mut R) -> Result<Vec<()>> {
            Ok(vec![()])
        }
    }

    #[test]
    fn test_cost_error_propagates() {
        let config = HcConfig::default().with_seed(1);
        assert!(HcRunner::run(&FailingProblem, &config).is_err());
    }
}
