//! SA execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SaConfig;
use crate::error::Result;
use crate::search::{best_of_batch, SearchProblem};

/// Result of a simulated annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found during the entire run.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Number of steps (neighborhood batches) executed.
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,
}

/// Executes the simulated annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs annealing until the temperature floor or iteration budget.
    ///
    /// Each step scores a neighborhood batch and considers its best
    /// member. Improving candidates are accepted unconditionally;
    /// worsening ones with probability `exp(-delta / T)`. The best-ever
    /// solution is tracked separately from the current one, which may
    /// regress through accepted uphill moves.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`SaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P: SearchProblem>(problem: &P, config: &SaConfig) -> Result<SaResult<P::Solution>> {
        config.validate().expect("invalid SaConfig");

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));

        let mut current = problem.initial_solution(&mut rng)?;
        let mut current_cost = problem.cost(&current)?;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while temperature > config.min_temperature {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }

            let batch = problem.neighborhood(&current, &mut rng)?;
            let Some((candidate, candidate_cost)) = best_of_batch(problem, batch)? else {
                break;
            };
            iterations += 1;

            let delta = candidate_cost - current_cost;
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random::<f64>() < acceptance_probability(delta, temperature)
            };

            if accept {
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    log::debug!("annealing: new best {best_cost:.4} -> {current_cost:.4}");
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            temperature = config.cooling.cool(temperature);
        }

        Ok(SaResult {
            best,
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        })
    }
}

/// Metropolis acceptance probability for a worsening move.
///
/// Clamped to [0, 1]; a non-finite value (extreme delta or vanishing
/// temperature) counts as 0 so the run continues instead of misbehaving.
fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if temperature <= 0.0 {
        return 0.0;
    }
    let p = (-delta / temperature).exp();
    if p.is_finite() {
        p.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
