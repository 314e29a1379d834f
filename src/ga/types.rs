//! Core trait for the genetic algorithm.

use rand::Rng;

use crate::error::Result;

/// Defines a genetic algorithm problem.
///
/// The user implements initialization, evaluation and the two variation
/// operators; the runner handles the generational loop, elitism and
/// parent selection.
///
/// # Minimization
///
/// The runner minimizes the evaluated cost. For maximization, negate the
/// fitness.
pub trait GaProblem {
    /// The solution (chromosome) representation.
    type Solution: Clone;

    /// Creates a random individual for the initial population.
    fn create<R: Rng>(&self, rng: &mut R) -> Result<Self::Solution>;

    /// Computes the cost of an individual. Lower is better.
    ///
    /// Fallible for the same reason as
    /// [`SearchProblem::cost`](crate::search::SearchProblem::cost): a
    /// touring chromosome over a missing edge is a structural bug that
    /// must surface.
    fn evaluate(&self, solution: &Self::Solution) -> Result<f64>;

    /// Produces one offspring by recombining two parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Solution,
        parent2: &Self::Solution,
        rng: &mut R,
    ) -> Self::Solution;

    /// Mutates an offspring in place.
    ///
    /// Applied by the runner with probability
    /// [`GaConfig::mutation_rate`](super::GaConfig::mutation_rate).
    fn mutate<R: Rng>(&self, solution: &mut Self::Solution, rng: &mut R);
}
