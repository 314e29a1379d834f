//! Knapsack scoring, perturbation and GA encoding.

use rand::Rng;

use super::catalog::Catalog;
use crate::error::Result;
use crate::ga::{operators, GaProblem};
use crate::search::SearchProblem;

/// One entry of a candidate solution: how many copies of a named item to
/// pack. Solutions carry one pick per catalog item, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct Pick {
    pub name: String,
    pub quantity: u32,
}

/// A candidate knapsack solution.
pub type PackSolution = Vec<Pick>;

/// Value of a solution: the sum of `quantity * value` over all picks, or
/// 0 whenever the summed weight exceeds `capacity`.
///
/// The zero return is a hard fitness cliff, not partial credit: operators
/// may construct infeasible solutions freely, scoring just never rewards
/// them. Picks naming unknown items contribute nothing.
pub fn fitness(solution: &[Pick], catalog: &Catalog, capacity: f64) -> f64 {
    let mut total_value = 0.0;
    let mut total_weight = 0.0;
    for pick in solution {
        if let Some(item) = catalog.get(&pick.name) {
            total_value += item.value * f64::from(pick.quantity);
            total_weight += item.weight * f64::from(pick.quantity);
        }
    }
    if total_weight > capacity {
        0.0
    } else {
        total_value
    }
}

/// Summed weight of a solution.
pub fn total_weight(solution: &[Pick], catalog: &Catalog) -> f64 {
    solution
        .iter()
        .filter_map(|pick| {
            catalog
                .get(&pick.name)
                .map(|item| item.weight * f64::from(pick.quantity))
        })
        .sum()
}

/// The knapsack instance wired up for all three drivers.
///
/// The neighborhood mixes two perturbations: swapping the quantities of
/// two distinct items (probability `swap_probability`) and bumping one
/// item's quantity up or down by one (`increment_probability` selects the
/// direction). Both ratios vary between the trajectory algorithms, so
/// they are parameters rather than constants.
#[derive(Debug, Clone)]
pub struct KnapsackProblem {
    catalog: Catalog,
    capacity: f64,
    batch_size: usize,
    swap_probability: f64,
    increment_probability: f64,
}

impl KnapsackProblem {
    pub fn new(catalog: Catalog, capacity: f64) -> Self {
        Self {
            catalog,
            capacity,
            batch_size: 10,
            swap_probability: 0.98,
            increment_probability: 0.58,
        }
    }

    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.batch_size = n.max(1);
        self
    }

    pub fn with_swap_probability(mut self, p: f64) -> Self {
        self.swap_probability = p.clamp(0.0, 1.0);
        self
    }

    pub fn with_increment_probability(mut self, p: f64) -> Self {
        self.increment_probability = p.clamp(0.0, 1.0);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Positive-valued fitness of a solution (see [`fitness`]).
    pub fn fitness_of(&self, solution: &[Pick]) -> f64 {
        fitness(solution, &self.catalog, self.capacity)
    }

    /// One perturbed clone of `solution`.
    fn perturb<R: Rng>(&self, solution: &PackSolution, rng: &mut R) -> PackSolution {
        let mut candidate = solution.clone();
        let n = candidate.len();

        if n >= 2 && rng.random::<f64>() < self.swap_probability {
            let i = rng.random_range(0..n);
            let j = loop {
                let j = rng.random_range(0..n);
                if j != i {
                    break j;
                }
            };
            let tmp = candidate[i].quantity;
            candidate[i].quantity = candidate[j].quantity;
            candidate[j].quantity = tmp;
            return candidate;
        }

        // Increment/decrement one item's quantity. Bounded retries: the
        // move may be inapplicable (nothing to decrement, availability
        // exhausted), in which case the clone is returned unperturbed.
        for _ in 0..4 * n.max(1) {
            let idx = rng.random_range(0..n);
            let available = self
                .catalog
                .get(&candidate[idx].name)
                .map_or(0, |item| item.available);
            if rng.random::<f64>() < self.increment_probability {
                if candidate[idx].quantity + 1 < available {
                    candidate[idx].quantity += 1;
                    break;
                }
            } else if candidate[idx].quantity > 1 {
                candidate[idx].quantity -= 1;
                break;
            }
        }
        candidate
    }
}

impl SearchProblem for KnapsackProblem {
    type Solution = PackSolution;

    /// A random feasible starting fill: each item draws a quantity up to
    /// its availability, then sheds copies until the running weight fits.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<PackSolution> {
        let mut solution = Vec::with_capacity(self.catalog.len());
        let mut weight = 0.0;
        for item in self.catalog.items() {
            let mut quantity = rng.random_range(0..=item.available);
            while quantity > 0 && weight + f64::from(quantity) * item.weight > self.capacity {
                quantity -= 1;
            }
            weight += f64::from(quantity) * item.weight;
            solution.push(Pick {
                name: item.name.clone(),
                quantity,
            });
        }
        Ok(solution)
    }

    fn cost(&self, solution: &PackSolution) -> Result<f64> {
        Ok(-self.fitness_of(solution))
    }

    fn neighborhood<R: Rng>(
        &self,
        current: &PackSolution,
        rng: &mut R,
    ) -> Result<Vec<PackSolution>> {
        Ok((0..self.batch_size)
            .map(|_| self.perturb(current, rng))
            .collect())
    }
}

impl GaProblem for KnapsackProblem {
    type Solution = PackSolution;

    /// Chromosomes draw each quantity uniformly up to the item's
    /// capacity-derived cap, so the initial population already respects
    /// per-item bounds (though not necessarily total weight).
    fn create<R: Rng>(&self, rng: &mut R) -> Result<PackSolution> {
        Ok(self
            .catalog
            .items()
            .iter()
            .map(|item| Pick {
                name: item.name.clone(),
                quantity: rng.random_range(0..=item.max_quantity(self.capacity)),
            })
            .collect())
    }

    fn evaluate(&self, solution: &PackSolution) -> Result<f64> {
        Ok(-self.fitness_of(solution))
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &PackSolution,
        parent2: &PackSolution,
        rng: &mut R,
    ) -> PackSolution {
        operators::single_point_crossover(parent1, parent2, rng)
    }

    /// Repair-style mutation: clamp every quantity that exceeds its
    /// capacity-derived cap.
    fn mutate<R: Rng>(&self, solution: &mut PackSolution, _rng: &mut R) {
        for pick in solution.iter_mut() {
            if let Some(item) = self.catalog.get(&pick.name) {
                let cap = item.max_quantity(self.capacity);
                if pick.quantity > cap {
                    pick.quantity = cap;
                }
            }
        }
    }
}
