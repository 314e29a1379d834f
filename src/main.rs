//! Command-line entry point for the metaheuristic solvers.

use std::fs;
use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::{arg, ArgMatches, Command};
use env_logger::Env;

use packtour::ga::{GaConfig, GaRunner};
use packtour::graph::Graph;
use packtour::hc::{HcConfig, HcRunner};
use packtour::knapsack::{parse_instance, total_weight, KnapsackProblem, PackSolution};
use packtour::sa::{CoolingSchedule, SaConfig, SaRunner};
use packtour::tsp::{build_graph, parse_cities, TourProblem};

fn cli() -> Command {
    Command::new("packtour")
        .about("Solves knapsack packing and city touring with local-search metaheuristics")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("knapsack")
                .about("Packs a bounded multi-item knapsack instance")
                .arg(arg!(<FILE> "Path to the knapsack instance file"))
                .arg(
                    arg!(--algorithm [ALGORITHM] "Solver: ga, hc or sa")
                        .default_value("ga")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(--seed [SEED] "Random seed").value_parser(clap::value_parser!(u64))),
        )
        .subcommand(
            Command::new("tsp")
                .about("Finds a short closed tour over a city coordinate file")
                .arg(arg!(<CITIES> "Path to the cities file (name latitude longitude)"))
                .arg(
                    arg!(--algorithm [ALGORITHM] "Solver: sa, ha or ga")
                        .default_value("sa")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(--seed [SEED] "Random seed").value_parser(clap::value_parser!(u64))),
        )
        .subcommand(
            Command::new("compare")
                .about("Times all three solvers on growing subsets of a city file")
                .arg(arg!(<CITIES> "Path to the cities file (name latitude longitude)"))
                .arg(arg!(--seed [SEED] "Random seed").value_parser(clap::value_parser!(u64))),
        )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match cli().get_matches().subcommand() {
        Some(("knapsack", sub_m)) => run_knapsack(sub_m),
        Some(("tsp", sub_m)) => run_tsp(sub_m),
        Some(("compare", sub_m)) => run_compare(sub_m),
        _ => Err(anyhow!("invalid subcommand")),
    }
}

fn run_knapsack(matches: &ArgMatches) -> Result<()> {
    let path = matches.get_one::<String>("FILE").unwrap();
    let algorithm = matches.get_one::<String>("algorithm").unwrap();
    let seed = matches.get_one::<u64>("seed").copied();

    let text = fs::read_to_string(path)?;
    let instance = parse_instance(&text)?;
    log::info!(
        "knapsack: capacity {}, {} items, algorithm {algorithm}",
        instance.capacity,
        instance.catalog.len()
    );

    let (best, value) = match algorithm.as_str() {
        "hc" => {
            let problem = KnapsackProblem::new(instance.catalog.clone(), instance.capacity);
            let mut config = HcConfig::default().with_max_stalls(1000);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let result = HcRunner::run(&problem, &config)?;
            log::info!("hill climbing stopped after {} iterations", result.iterations);
            (result.best, -result.best_cost)
        }
        "sa" => {
            let problem = KnapsackProblem::new(instance.catalog.clone(), instance.capacity)
                .with_swap_probability(0.58)
                .with_increment_probability(0.68);
            let mut config = SaConfig::default()
                .with_initial_temperature(10_000.0)
                .with_min_temperature(1.0)
                .with_cooling(CoolingSchedule::Linear { step: 0.5 });
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let result = SaRunner::run(&problem, &config)?;
            log::info!(
                "annealing stopped at T={:.2} after {} iterations ({} accepted)",
                result.final_temperature,
                result.iterations,
                result.accepted_moves
            );
            (result.best, -result.best_cost)
        }
        "ga" => {
            let problem = KnapsackProblem::new(instance.catalog.clone(), instance.capacity);
            let mut config = GaConfig::default()
                .with_population_size(700)
                .with_max_generations(600)
                .with_elite_ratio(0.5)
                .with_mutation_rate(1.0);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let result = GaRunner::run(&problem, &config)?;
            log::info!(
                "genetic algorithm: best found at generation {}",
                result.best_generation
            );
            (result.best, -result.best_cost)
        }
        other => {
            eprintln!("unknown algorithm {other:?}; valid choices are ga, hc, sa");
            return Ok(());
        }
    };

    print_packing(&best, value, &instance.catalog, instance.capacity);
    Ok(())
}

fn print_packing(
    best: &PackSolution,
    value: f64,
    catalog: &packtour::knapsack::Catalog,
    capacity: f64,
) {
    for pick in best.iter().filter(|pick| pick.quantity > 0) {
        println!("{} x {}", pick.quantity, pick.name);
    }
    println!(
        "value {value}, weight {}/{capacity}",
        total_weight(best, catalog)
    );
}

fn run_tsp(matches: &ArgMatches) -> Result<()> {
    let path = matches.get_one::<String>("CITIES").unwrap();
    let algorithm = matches.get_one::<String>("algorithm").unwrap();
    let seed = matches.get_one::<u64>("seed").copied();

    let graph = load_city_graph(path)?;
    let problem = TourProblem::new(&graph);
    log::info!("tsp: {} cities, algorithm {algorithm}", graph.node_count());

    let (route, distance) = match algorithm.as_str() {
        "sa" => {
            let mut config = SaConfig::default()
                .with_initial_temperature(100.0)
                .with_min_temperature(0.1)
                .with_cooling(CoolingSchedule::Geometric { alpha: 0.99 })
                .with_max_iterations(10_000);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let result = SaRunner::run(&problem, &config)?;
            (result.best, result.best_cost)
        }
        "ha" => {
            let mut config = HcConfig::default()
                .with_max_stalls(0)
                .with_max_iterations(500);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let result = HcRunner::run(&problem, &config)?;
            (result.best, result.best_cost)
        }
        "ga" => {
            let mut config = GaConfig::default()
                .with_population_size(20)
                .with_max_generations(1000)
                .with_elite_ratio(0.0)
                .with_mutation_rate(0.1);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let result = GaRunner::run(&problem, &config)?;
            // The GA works on open permutations; close the route for display.
            let mut route = result.best;
            if let Some(first) = route.first().cloned() {
                route.push(first);
            }
            (route, result.best_cost)
        }
        other => {
            eprintln!("unknown algorithm {other:?}; valid choices are sa, ha, ga");
            return Ok(());
        }
    };

    println!("{}", route.join(" -> "));
    println!("distance {distance:.1} km");
    Ok(())
}

/// Runs all three solvers on growing city subsets and reports wall time,
/// for eyeballing how each algorithm scales.
fn run_compare(matches: &ArgMatches) -> Result<()> {
    let path = matches.get_one::<String>("CITIES").unwrap();
    let seed = matches.get_one::<u64>("seed").copied().unwrap_or(0);

    let cities = parse_cities(&fs::read_to_string(path)?);
    if cities.is_empty() {
        return Err(anyhow!("no cities parsed from {path}"));
    }

    for size in [8usize, 16, 20] {
        let size = size.min(cities.len());
        let graph = build_graph(&cities[..size]);
        let problem = TourProblem::new(&graph);
        println!("--- {size} cities ---");

        let started = Instant::now();
        let hc = HcRunner::run(
            &problem,
            &HcConfig::default()
                .with_max_stalls(0)
                .with_max_iterations(500)
                .with_seed(seed),
        )?;
        report("hill climbing", hc.best_cost, started);

        let started = Instant::now();
        let sa = SaRunner::run(
            &problem,
            &SaConfig::default()
                .with_cooling(CoolingSchedule::Geometric { alpha: 0.99 })
                .with_max_iterations(10_000)
                .with_seed(seed),
        )?;
        report("annealing", sa.best_cost, started);

        let started = Instant::now();
        let ga = GaRunner::run(
            &problem,
            &GaConfig::default()
                .with_population_size(20)
                .with_max_generations(1000)
                .with_elite_ratio(0.0)
                .with_mutation_rate(0.1)
                .with_seed(seed),
        )?;
        report("genetic", ga.best_cost, started);

        if size == cities.len() {
            break;
        }
    }
    Ok(())
}

fn report(name: &str, distance: f64, started: Instant) {
    println!(
        "{name:>14}: {distance:>8.1} km in {:>6.2?}",
        started.elapsed()
    );
}

fn load_city_graph(path: &str) -> Result<Graph> {
    let cities = parse_cities(&fs::read_to_string(path)?);
    if cities.is_empty() {
        return Err(anyhow!("no cities parsed from {path}"));
    }
    Ok(build_graph(&cities))
}
