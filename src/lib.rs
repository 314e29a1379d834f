//! Local-search metaheuristics for two classic optimization domains.
//!
//! Three drivers share a minimization contract:
//!
//! - [`hc`]: hill climbing with batch neighborhoods and stall detection
//! - [`sa`]: simulated annealing with pluggable cooling schedules
//! - [`ga`]: a generational genetic algorithm with optional elitism
//!
//! The trajectory drivers (`hc`, `sa`) consume a [`search::SearchProblem`];
//! the genetic algorithm consumes a [`ga::GaProblem`]. Two domains
//! implement both:
//!
//! - [`knapsack`]: bounded multi-item knapsack packing
//! - [`tsp`]: closed tours over a city distance graph ([`graph`], [`geo`])
//!
//! # Example
//!
//! ```
//! use packtour::hc::{HcConfig, HcRunner};
//! use packtour::knapsack::{parse_instance, KnapsackProblem};
//!
//! let instance = parse_instance("10\nitem,weight,price,amount\nA,5,10,2\nB,3,7,3\n")?;
//! let problem = KnapsackProblem::new(instance.catalog, instance.capacity);
//! let config = HcConfig::default().with_max_stalls(500).with_seed(42);
//!
//! let result = HcRunner::run(&problem, &config)?;
//! assert!(result.best_cost <= 0.0); // cost is negated value
//! # Ok::<(), packtour::error::Error>(())
//! ```

pub mod error;
pub mod ga;
pub mod geo;
pub mod graph;
pub mod hc;
pub mod knapsack;
pub mod sa;
pub mod search;
pub mod tsp;
