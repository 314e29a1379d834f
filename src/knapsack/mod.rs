//! Bounded multi-item knapsack domain.
//!
//! An immutable [`Catalog`] of items (value, weight, available amount)
//! plus a weight capacity define the instance. Candidate solutions are
//! ordered quantity picks, one per catalog item; scoring applies a hard
//! fitness cliff (zero value for any over-capacity selection) so the
//! perturbation operators may wander through infeasible states.

mod catalog;
mod problem;

pub use catalog::{parse_instance, Catalog, Item, KnapsackInstance};
pub use problem::{fitness, total_weight, KnapsackProblem, PackSolution, Pick};
