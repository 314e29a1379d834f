//! Hill climbing.
//!
//! Greedy ascent over a [`SearchProblem`](crate::search::SearchProblem):
//! every step the best-scoring member of a neighborhood batch replaces the
//! current solution, but only on strict improvement. A stall counter
//! and/or a fixed iteration budget terminate the climb, and restarts are
//! left to the caller.

mod config;
mod runner;

pub use config::HcConfig;
pub use runner::{HcResult, HcRunner};
