//! Criterion benchmarks for the three solvers.
//!
//! Uses small synthetic instances of both domains to measure driver
//! overhead at fixed iteration budgets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use packtour::ga::{GaConfig, GaRunner};
use packtour::graph::Graph;
use packtour::hc::{HcConfig, HcRunner};
use packtour::knapsack::{Catalog, Item, KnapsackProblem};
use packtour::sa::{CoolingSchedule, SaConfig, SaRunner};
use packtour::tsp::TourProblem;

fn knapsack_instance(items: usize) -> KnapsackProblem {
    let catalog = Catalog::new(
        (0..items)
            .map(|i| Item {
                name: format!("item{i}"),
                weight: 1.0 + (i % 7) as f64,
                value: 1.0 + (i % 11) as f64,
                available: 3,
            })
            .collect(),
    );
    KnapsackProblem::new(catalog, 2.5 * items as f64)
}

/// Ring-of-cities graph with chords, so tours have real structure without
/// the quadratic edge count of a full coordinate instance.
fn ring_graph(cities: usize) -> Graph {
    let mut graph = Graph::new();
    for i in 0..cities {
        for j in i + 1..cities {
            let gap = (j - i).min(cities - (j - i)) as f64;
            graph.add_edge(format!("c{i}"), format!("c{j}"), gap * 10.0 + 1.0);
        }
    }
    graph
}

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack");
    for items in [10usize, 40] {
        let problem = knapsack_instance(items);

        group.bench_with_input(BenchmarkId::new("hc", items), &problem, |b, problem| {
            let config = HcConfig::default()
                .with_max_stalls(0)
                .with_max_iterations(200)
                .with_seed(42);
            b.iter(|| black_box(HcRunner::run(problem, &config).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("sa", items), &problem, |b, problem| {
            let config = SaConfig::default()
                .with_initial_temperature(1_000.0)
                .with_min_temperature(1.0)
                .with_cooling(CoolingSchedule::Linear { step: 5.0 })
                .with_seed(42);
            b.iter(|| black_box(SaRunner::run(problem, &config).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("ga", items), &problem, |b, problem| {
            let config = GaConfig::default()
                .with_population_size(50)
                .with_max_generations(20)
                .with_elite_ratio(0.5)
                .with_seed(42);
            b.iter(|| black_box(GaRunner::run(problem, &config).unwrap()));
        });
    }
    group.finish();
}

fn bench_touring(c: &mut Criterion) {
    let mut group = c.benchmark_group("touring");
    for cities in [8usize, 16] {
        let graph = ring_graph(cities);

        group.bench_with_input(BenchmarkId::new("hc", cities), &graph, |b, graph| {
            let problem = TourProblem::new(graph);
            let config = HcConfig::default()
                .with_max_stalls(0)
                .with_max_iterations(100)
                .with_seed(42);
            b.iter(|| black_box(HcRunner::run(&problem, &config).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("sa", cities), &graph, |b, graph| {
            let problem = TourProblem::new(graph);
            let config = SaConfig::default()
                .with_cooling(CoolingSchedule::Geometric { alpha: 0.95 })
                .with_max_iterations(500)
                .with_seed(42);
            b.iter(|| black_box(SaRunner::run(&problem, &config).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("ga", cities), &graph, |b, graph| {
            let problem = TourProblem::new(graph);
            let config = GaConfig::default()
                .with_population_size(20)
                .with_max_generations(50)
                .with_elite_ratio(0.0)
                .with_mutation_rate(0.1)
                .with_seed(42);
            b.iter(|| black_box(GaRunner::run(&problem, &config).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_knapsack, bench_touring);
criterion_main!(benches);
