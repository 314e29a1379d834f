//! City coordinate parsing and distance-graph construction.

use crate::geo::haversine;
use crate::graph::Graph;

/// A named coordinate read from the cities file.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Parses whitespace-delimited `name latitude longitude` lines.
///
/// Malformed lines are logged and skipped, never fatal.
pub fn parse_cities(text: &str) -> Vec<City> {
    let mut cities = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_city_line(line) {
            Some(city) => cities.push(city),
            None => log::warn!("ignoring improperly formatted city line: {line:?}"),
        }
    }
    cities
}

fn parse_city_line(line: &str) -> Option<City> {
    let mut fields = line.split_whitespace();
    let name = fields.next()?.to_string();
    let latitude: f64 = fields.next()?.parse().ok()?;
    let longitude: f64 = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(City {
        name,
        latitude,
        longitude,
    })
}

/// Builds the complete undirected graph over `cities` with Haversine
/// great-circle distances as edge weights.
pub fn build_graph(cities: &[City]) -> Graph {
    let mut graph = Graph::new();
    for city in cities {
        graph.add_node(city.name.clone());
    }
    for (i, a) in cities.iter().enumerate() {
        for b in &cities[i + 1..] {
            let distance = haversine(a.latitude, a.longitude, b.latitude, b.longitude);
            graph.add_edge(a.name.clone(), b.name.clone(), distance);
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let cities = parse_cities("paris 48.8566 2.3522\nlondon 51.5074 -0.1278\n");
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].name, "paris");
        assert!((cities[1].latitude - 51.5074).abs() < 1e-12);
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let cities = parse_cities(
            "paris 48.8566 2.3522\n\
             missing-coords\n\
             berlin 52.52 not-a-number\n\
             extra 1.0 2.0 3.0\n\
             rome 41.9 12.5\n",
        );
        let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["paris", "rome"]);
    }

    #[test]
    fn test_build_graph_is_complete_and_symmetric() {
        let cities = parse_cities("a 0 0\nb 0 1\nc 1 0\n");
        let graph = build_graph(&cities);
        assert_eq!(graph.node_count(), 3);
        for x in ["a", "b", "c"] {
            for y in ["a", "b", "c"] {
                if x == y {
                    continue;
                }
                let forward = graph.edge_weight(x, y).unwrap();
                let back = graph.edge_weight(y, x).unwrap();
                assert!((forward - back).abs() < 1e-9);
                assert!(forward > 0.0);
            }
        }
    }
}
