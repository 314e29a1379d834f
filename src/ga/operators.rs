//! Domain-agnostic genetic operators.
//!
//! - [`single_point_crossover`]: splice two gene vectors at a random cut.
//!   Suitable for positional encodings (knapsack quantities).
//! - [`cut_and_fill_crossover`]: prefix from one parent, remainder in the
//!   other parent's order with duplicates skipped. Closed over
//!   permutations: two permutations of the same set always yield another.
//! - [`swap_mutation`]: exchange two random positions.

use rand::Rng;

/// Single-point crossover over equal-length gene vectors.
///
/// The child takes `parent1[..cut]` and `parent2[cut..]`, with the cut
/// drawn uniformly from `0..len`. Singleton parents degenerate to a clone
/// of `parent2`'s gene via `cut == 0`.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn single_point_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> Vec<T> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let cut = rng.random_range(0..n);
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&parent1[..cut]);
    child.extend_from_slice(&parent2[cut..]);
    child
}

/// Cut-and-fill crossover over permutations.
///
/// Takes `parent1[..cut]` as a prefix, then scans `parent2` in full and
/// appends every element not already present. When both parents are
/// permutations of the same set the child is too: the scan visits every
/// element, so nothing is omitted and nothing repeats.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn cut_and_fill_crossover<T: Clone + PartialEq, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> Vec<T> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return parent1.to_vec();
    }

    let cut = rng.random_range(0..n);
    let mut child: Vec<T> = parent1[..cut].to_vec();
    for gene in parent2 {
        if !child.contains(gene) {
            child.push(gene.clone());
        }
    }
    child
}

/// Swap mutation: exchange two random positions. No-op below length 2.
pub fn swap_mutation<T, R: Rng>(genes: &mut [T], rng: &mut R) {
    let n = genes.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    genes.swap(i, j);
}
