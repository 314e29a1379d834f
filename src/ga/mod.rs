//! Genetic algorithm.
//!
//! Generational population search. The problem supplies creation,
//! evaluation, crossover and mutation through [`GaProblem`]; the runner
//! owns selection, elitism and best-ever tracking.
//!
//! Two regimes are expressed through [`GaConfig::elite_ratio`]:
//!
//! - `elite_ratio > 0`: the top fraction survives unchanged and offspring
//!   are bred from two distinct parents in the elite pool (the knapsack
//!   configuration),
//! - `elite_ratio == 0`: the whole population is replaced each generation
//!   by offspring of parents drawn from the full population (the touring
//!   configuration).

mod config;
pub mod operators;
mod runner;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use types::GaProblem;
