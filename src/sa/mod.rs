//! Simulated annealing.
//!
//! Trajectory search over a [`SearchProblem`](crate::search::SearchProblem)
//! with probabilistic acceptance of worsening moves, governed by a
//! temperature that decays under a pluggable cooling schedule.

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
