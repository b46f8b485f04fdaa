use rand::prelude::*;

use crate::graph::{CompactGraph, Edge};
use crate::Result;

/// Generates a random directed graph with `vertex_count` vertices and up to
/// `edge_count` edges, weights drawn uniformly from `1.0..100.0`.
///
/// Self-loops are skipped rather than re-drawn, so sparse graphs may come in
/// slightly under `edge_count`. The adjacency form is built before returning.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    vertex_count: usize,
    edge_count: usize,
) -> Result<CompactGraph<f64>> {
    assert!(vertex_count > 1, "vertex_count must be at least 2");

    let mut edges = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        if from != to {
            let weight = rng.gen_range(1.0..100.0);
            edges.push(Edge::new(from, to, weight));
        }
    }

    CompactGraph::with_adjacency(vertex_count, edges)
}

/// Generates a directed cycle `0 -> 1 -> ... -> vertex_count-1 -> 0` with
/// unit weights, a fully connected fixture with known distances.
pub fn cycle_graph(vertex_count: usize) -> Result<CompactGraph<f64>> {
    assert!(vertex_count > 1, "vertex_count must be at least 2");

    let edges = (0..vertex_count)
        .map(|v| Edge::new(v, (v + 1) % vertex_count, 1.0))
        .collect();
    CompactGraph::with_adjacency(vertex_count, edges)
}
