//! Search-problem adapters for city touring.

use rand::seq::SliceRandom;
use rand::Rng;

use super::tour::{random_tour, rewalk_from, tour_cost};
use crate::error::Result;
use crate::ga::{operators, GaProblem};
use crate::graph::Graph;
use crate::search::SearchProblem;

/// Tour optimization over a city distance graph.
///
/// Plugs the same graph into both driver families:
///
/// - For the trajectory drivers ([`SearchProblem`]) candidates are closed
///   walk tours (first == last, possibly with revisits) and successors
///   come from truncate-and-rewalk.
/// - For the genetic algorithm ([`GaProblem`]) candidates are open city
///   permutations, evaluated as the closed cycle they induce.
#[derive(Debug, Clone)]
pub struct TourProblem<'a> {
    graph: &'a Graph,
    cities: Vec<String>,
    batch_size: usize,
    initial_samples: usize,
}

impl<'a> TourProblem<'a> {
    /// Tours over every node of `graph`.
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            cities: graph.nodes().map(String::from).collect(),
            batch_size: 10,
            initial_samples: 20,
        }
    }

    /// Restricts the tour to a subset of the graph's cities.
    pub fn with_cities(mut self, cities: Vec<String>) -> Self {
        self.cities = cities;
        self
    }

    /// Number of successors generated per step.
    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.batch_size = n;
        self
    }

    /// Number of random tours sampled when picking a starting candidate.
    pub fn with_initial_samples(mut self, n: usize) -> Self {
        self.initial_samples = n;
        self
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }
}

impl SearchProblem for TourProblem<'_> {
    type Solution = Vec<String>;

    /// Best of `initial_samples` random walk tours.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<Vec<String>> {
        let mut best = random_tour(self.graph, &self.cities, rng)?;
        let mut best_cost = tour_cost(&best, self.graph)?;

        for _ in 1..self.initial_samples.max(1) {
            let candidate = random_tour(self.graph, &self.cities, rng)?;
            let cost = tour_cost(&candidate, self.graph)?;
            if cost < best_cost {
                best = candidate;
                best_cost = cost;
            }
        }
        Ok(best)
    }

    fn cost(&self, tour: &Vec<String>) -> Result<f64> {
        tour_cost(tour, self.graph)
    }

    fn neighborhood<R: Rng>(&self, current: &Vec<String>, rng: &mut R) -> Result<Vec<Vec<String>>> {
        (0..self.batch_size.max(1))
            .map(|_| rewalk_from(self.graph, &self.cities, current, rng))
            .collect()
    }
}

impl GaProblem for TourProblem<'_> {
    type Solution = Vec<String>;

    /// A uniformly shuffled city permutation.
    fn create<R: Rng>(&self, rng: &mut R) -> Result<Vec<String>> {
        let mut perm = self.cities.clone();
        perm.shuffle(rng);
        Ok(perm)
    }

    /// Cost of the closed cycle the permutation induces: the open path
    /// plus the return edge from last to first.
    fn evaluate(&self, perm: &Vec<String>) -> Result<f64> {
        if perm.len() < 2 {
            return Ok(0.0);
        }
        let open = tour_cost(perm, self.graph)?;
        let closing = self
            .graph
            .edge_weight(&perm[perm.len() - 1], &perm[0])?;
        Ok(open + closing)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Vec<String>,
        parent2: &Vec<String>,
        rng: &mut R,
    ) -> Vec<String> {
        operators::cut_and_fill_crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, perm: &mut Vec<String>, rng: &mut R) {
        operators::swap_mutation(perm, rng);
    }
}
