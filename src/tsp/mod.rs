//! City-touring (traveling salesman) domain.
//!
//! Cities parsed from a coordinate file become a complete [`Graph`] with
//! Haversine edge weights. The trajectory drivers work on closed tours
//! built by random walks that prefer unvisited neighbours; the genetic
//! algorithm works on open city permutations evaluated as closed cycles.
//!
//! [`Graph`]: crate::graph::Graph

mod cities;
mod problem;
mod tour;

pub use cities::{build_graph, parse_cities, City};
pub use problem::TourProblem;
pub use tour::{random_tour, rewalk_from, tour_cost};
