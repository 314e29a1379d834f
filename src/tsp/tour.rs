//! Tour scoring and random-walk construction.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Total distance along `path`, summing the edge weight of every
/// consecutive pair.
///
/// Order-sensitive: on a directed graph the reverse path may cost
/// differently or not exist. Fails with [`Error::MissingEdge`] when a
/// consecutive pair is not adjacent; a correctly built tour never
/// triggers this, so the failure surfaces generator bugs instead of
/// being scored around.
pub fn tour_cost(path: &[String], graph: &Graph) -> Result<f64> {
    let mut distance = 0.0;
    for pair in path.windows(2) {
        distance += graph.edge_weight(&pair[0], &pair[1])?;
    }
    Ok(distance)
}

/// Builds a random closed tour over `cities`, starting at a random city.
///
/// The walk prefers unvisited neighbours; when none remain adjacent it
/// falls back to a random neighbour (a revisit) as forced continuation.
/// Once every city is visited it keeps walking until it returns to the
/// start, so the result is closed (first == last) and uses real edges
/// only.
pub fn random_tour<R: Rng>(graph: &Graph, cities: &[String], rng: &mut R) -> Result<Vec<String>> {
    let start = cities
        .choose(rng)
        .ok_or_else(|| Error::invalid_input("no cities to tour"))?;
    complete_walk(graph, cities, vec![start.clone()], rng)
}

/// Builds a successor of `tour`: keep a random-length prefix and re-walk
/// the remainder from the truncation point.
pub fn rewalk_from<R: Rng>(
    graph: &Graph,
    cities: &[String],
    tour: &[String],
    rng: &mut R,
) -> Result<Vec<String>> {
    if tour.len() < 2 {
        return random_tour(graph, cities, rng);
    }
    let keep = rng.random_range(1..tour.len());
    complete_walk(graph, cities, tour[..keep].to_vec(), rng)
}

/// Extends a non-empty path prefix into a closed tour (see
/// [`random_tour`] for the walk policy).
///
/// The walk is stochastic, so a step limit quadratic in the city count
/// guards against graphs it cannot close (e.g. disconnected ones).
fn complete_walk<R: Rng>(
    graph: &Graph,
    cities: &[String],
    mut path: Vec<String>,
    rng: &mut R,
) -> Result<Vec<String>> {
    let mut current = path
        .last()
        .cloned()
        .ok_or_else(|| Error::invalid_input("empty tour prefix"))?;
    let goal = path[0].clone();

    let mut unvisited: HashSet<String> = cities
        .iter()
        .filter(|city| !path.contains(city))
        .cloned()
        .collect();

    let step_limit = 4 * cities.len() * cities.len() + 64;
    let mut steps = 0usize;

    while !unvisited.is_empty() || current != goal {
        steps += 1;
        if steps > step_limit {
            return Err(Error::invalid_input(
                "random walk failed to close the tour; is the graph connected?",
            ));
        }

        let neighbours = graph.neighbours(&current)?;
        let next = if unvisited.is_empty() {
            // All cities seen: wander until the walk reaches the start.
            choose_neighbour(neighbours.keys(), &current, rng)?
        } else {
            let fresh: Vec<&String> = neighbours
                .keys()
                .filter(|name| unvisited.contains(*name))
                .collect();
            if fresh.is_empty() {
                choose_neighbour(neighbours.keys(), &current, rng)?
            } else {
                (*fresh
                    .choose(rng)
                    .ok_or_else(|| Error::invalid_input("empty neighbour choice"))?)
                .clone()
            }
        };

        unvisited.remove(&next);
        path.push(next.clone());
        current = next;
    }

    Ok(path)
}

fn choose_neighbour<'a, R: Rng>(
    neighbours: impl Iterator<Item = &'a String>,
    current: &str,
    rng: &mut R,
) -> Result<String> {
    let all: Vec<&String> = neighbours.collect();
    all.choose(rng)
        .map(|name| (*name).clone())
        .ok_or_else(|| Error::invalid_input(format!("city {current:?} has no neighbours")))
}
