//! GA generational loop execution.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::GaConfig;
use super::types::GaProblem;
use crate::error::Result;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<S: Clone> {
    /// The best individual found during the entire run, across all
    /// generations (a late population collapse cannot lose it).
    pub best: S,

    /// Cost of the best individual.
    pub best_cost: f64,

    /// Generation at which the best individual was found. 0 means the
    /// initial population; `max_generations` means the final offspring.
    pub best_generation: usize,
}

/// An individual paired with its evaluated cost.
#[derive(Clone)]
struct Scored<S> {
    solution: S,
    cost: f64,
}

/// Executes the GA generational loop.
pub struct GaRunner;

impl GaRunner {
    /// Runs the genetic algorithm for a fixed number of generations.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Solution>> {
        config.validate().expect("invalid GaConfig");

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));

        let mut population: Vec<Scored<P::Solution>> = Vec::with_capacity(config.population_size);
        for _ in 0..config.population_size {
            let solution = problem.create(&mut rng)?;
            let cost = problem.evaluate(&solution)?;
            population.push(Scored { solution, cost });
        }

        let mut best = {
            let first = population
                .iter()
                .min_by(|a, b| a.cost.total_cmp(&b.cost))
                .expect("population must not be empty");
            first.clone()
        };
        let mut best_generation = 0usize;

        for generation in 0..config.max_generations {
            population.sort_by(|a, b| a.cost.total_cmp(&b.cost));

            if population[0].cost < best.cost {
                log::debug!(
                    "generation {generation}: new best {:.4} -> {:.4}",
                    best.cost,
                    population[0].cost
                );
                best = population[0].clone();
                best_generation = generation;
            }

            let elite_count = config.elite_count();
            let mut next: Vec<Scored<P::Solution>> = population[..elite_count].to_vec();

            // Parents come from the elite pool when elitism is on, from
            // the whole population otherwise.
            let pool_size = if elite_count >= 2 {
                elite_count
            } else {
                population.len()
            };

            while next.len() < config.population_size {
                let (i, j) = pick_parents(pool_size, &mut rng);
                let mut child =
                    problem.crossover(&population[i].solution, &population[j].solution, &mut rng);
                if rng.random::<f64>() < config.mutation_rate {
                    problem.mutate(&mut child, &mut rng);
                }
                let cost = problem.evaluate(&child)?;
                next.push(Scored {
                    solution: child,
                    cost,
                });
            }

            population = next;
        }

        // The final generation's offspring were never compared to the best.
        if let Some(last_best) = population.iter().min_by(|a, b| a.cost.total_cmp(&b.cost)) {
            if last_best.cost < best.cost {
                best = last_best.clone();
                best_generation = config.max_generations;
            }
        }

        Ok(GaResult {
            best: best.solution,
            best_cost: best.cost,
            best_generation,
        })
    }
}

/// Two parent indices in `0..pool_size`, distinct whenever the pool
/// allows it. Duplicate pairs across different matings are expected.
fn pick_parents<R: Rng>(pool_size: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(0..pool_size);
    if pool_size < 2 {
        return (i, i);
    }
    loop {
        let j = rng.random_range(0..pool_size);
        if j != i {
            return (i, j);
        }
    }
}
