//! Shared contract for trajectory-based search.
//!
//! Hill climbing and simulated annealing consume the same three
//! ingredients: a random starting candidate, a cost function, and a batch
//! of successor candidates. The drivers differ only in their acceptance
//! and termination policy.

use rand::Rng;

use crate::error::Result;

/// Defines a problem for the trajectory drivers ([`crate::hc`], [`crate::sa`]).
///
/// # Minimization
///
/// Cost is minimized. Maximizing domains (knapsack value) negate their
/// fitness; see [`crate::knapsack`].
///
/// # Fallibility
///
/// `cost` and `neighborhood` return `Result` because the touring domain
/// treats a path over a missing edge as a structural bug that must surface
/// ([`crate::error::Error::MissingEdge`]), not as a bad score. Generators
/// are expected to only emit scoreable candidates.
pub trait SearchProblem {
    /// The candidate solution representation.
    type Solution: Clone;

    /// Creates one random valid starting candidate.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<Self::Solution>;

    /// Computes the cost of a candidate. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> Result<f64>;

    /// Produces a batch of candidate successors of `current`.
    ///
    /// The drivers score the whole batch and consider only its
    /// best-scoring member, so a generator may freely wander through
    /// poor candidates. The batch must not be empty.
    fn neighborhood<R: Rng>(
        &self,
        current: &Self::Solution,
        rng: &mut R,
    ) -> Result<Vec<Self::Solution>>;
}

/// Scores `batch` and returns the lowest-cost candidate with its cost.
///
/// Used by both trajectory drivers. Returns `None` for an empty batch.
pub(crate) fn best_of_batch<P: SearchProblem>(
    problem: &P,
    batch: Vec<P::Solution>,
) -> Result<Option<(P::Solution, f64)>> {
    let mut best: Option<(P::Solution, f64)> = None;
    for candidate in batch {
        let cost = problem.cost(&candidate)?;
        match &best {
            Some((_, incumbent)) if *incumbent <= cost => {}
            _ => best = Some((candidate, cost)),
        }
    }
    Ok(best)
}
