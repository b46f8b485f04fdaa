//! The global-efficiency metric and its execution strategies.
//!
//! Every strategy funnels through the same two pieces of arithmetic:
//! a reciprocal sum over ordered vertex pairs, and one normalization by
//! `V * (V - 1)`. Unreachable pairs contribute `1/inf = 0` to the sum but
//! always stay in the denominator. This shared aggregation is what makes
//! the dense, sequential, shared-memory, and message-passing paths agree
//! up to floating-point reassociation.

pub mod distributed;
pub mod parallel;

use log::debug;

use crate::algorithm::{Dijkstra, FloydWarshall};
use crate::data_structures::SquareMatrix;
use crate::graph::Graph;
use crate::Result;

pub use distributed::{all_pairs_distributed, distributed};
pub use parallel::parallel;

/// Divides a reciprocal total by the number of ordered vertex pairs.
///
/// A graph with fewer than two vertices has no pairs and efficiency zero.
pub(crate) fn normalize(total: f64, vertex_count: usize) -> f64 {
    if vertex_count < 2 {
        0.0
    } else {
        total / (vertex_count * (vertex_count - 1)) as f64
    }
}

/// Computes the efficiency from a full distance matrix.
pub fn from_matrix(distances: &SquareMatrix<f64>) -> f64 {
    let n = distances.dim();
    let mut total = 0.0;
    for i in 0..n {
        for j in 0..n {
            if i != j {
                total += distances.get(i, j).recip();
            }
        }
    }
    normalize(total, n)
}

/// Sums `1/d(source, target)` over all targets other than the source.
///
/// This is the per-source unit of work every parallel strategy distributes;
/// the caller still owes one [`normalize`] over the combined total.
pub fn partial_from_distances(source: usize, distances: &[f64]) -> f64 {
    distances
        .iter()
        .enumerate()
        .filter(|&(target, _)| target != source)
        .map(|(_, distance)| distance.recip())
        .sum()
}

/// Computes the efficiency densely, from the Floyd-Warshall matrix.
pub fn dense<G>(graph: &G) -> Result<f64>
where
    G: Graph<f64>,
{
    let distances = FloydWarshall::new().compute(graph)?;
    Ok(from_matrix(&distances))
}

/// Computes the efficiency with one Dijkstra run per source on the calling
/// thread, reusing a single distance buffer.
pub fn sequential<G>(graph: &G) -> Result<f64>
where
    G: Graph<f64>,
{
    let n = graph.vertex_count();
    let dijkstra = Dijkstra::new();
    let mut buffer = Vec::new();
    let mut total = 0.0;
    for source in 0..n {
        dijkstra.compute_into(graph, source, &mut buffer)?;
        total += partial_from_distances(source, &buffer);
    }
    debug!("sequential efficiency over {n} sources");
    Ok(normalize(total, n))
}
