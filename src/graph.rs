//! Weighted adjacency structure over named nodes.
//!
//! Backs the touring domain: city distances are stored once and read-only
//! for the duration of a search run. Adjacency uses `BTreeMap` so node and
//! neighbour iteration order is stable, which keeps seeded runs
//! reproducible.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Undirected-by-default weighted graph over string-named nodes.
///
/// `Clone` produces a deep snapshot of the adjacency maps, not an alias.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: BTreeMap<String, BTreeMap<String, f64>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node with no edges. No-op if it already exists.
    pub fn add_node(&mut self, node: impl Into<String>) {
        self.adjacency.entry(node.into()).or_default();
    }

    /// Adds a symmetric edge, creating both endpoints as needed.
    ///
    /// An existing edge between the same pair is overwritten.
    pub fn add_edge(&mut self, a: impl Into<String>, b: impl Into<String>, weight: f64) {
        let (a, b) = (a.into(), b.into());
        self.add_node(b.clone());
        self.adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
    }

    /// Adds a one-way edge from `a` to `b`, creating both endpoints as needed.
    pub fn add_directed_edge(&mut self, a: impl Into<String>, b: impl Into<String>, weight: f64) {
        let (a, b) = (a.into(), b.into());
        self.add_node(b.clone());
        self.adjacency.entry(a).or_default().insert(b, weight);
    }

    /// Removes the edge from `a` to `b`, and the reverse arc when present.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> Result<()> {
        let forward = self
            .adjacency
            .get_mut(a)
            .ok_or_else(|| Error::NodeNotFound(a.to_string()))?
            .remove(b);
        if forward.is_none() {
            return Err(Error::missing_edge(a, b));
        }
        if let Some(back) = self.adjacency.get_mut(b) {
            back.remove(a);
        }
        Ok(())
    }

    /// Neighbours of `node` with their edge weights.
    pub fn neighbours(&self, node: &str) -> Result<&BTreeMap<String, f64>> {
        self.adjacency
            .get(node)
            .ok_or_else(|| Error::NodeNotFound(node.to_string()))
    }

    /// Weight of the edge from `a` to `b`.
    pub fn edge_weight(&self, a: &str, b: &str) -> Result<f64> {
        self.neighbours(a)?
            .get(b)
            .copied()
            .ok_or_else(|| Error::missing_edge(a, b))
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// All node names in stable (sorted) order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }
}
