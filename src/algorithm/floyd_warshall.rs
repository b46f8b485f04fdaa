use std::fmt::Debug;

use num_traits::Float;

use crate::data_structures::SquareMatrix;
use crate::graph::Graph;
use crate::Result;

/// Dense all-pairs shortest paths via the Floyd-Warshall algorithm.
#[derive(Debug, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Creates a new FloydWarshall algorithm instance
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Computes the full `V` x `V` distance matrix: `0` on the diagonal,
    /// `+inf` for unreachable pairs.
    ///
    /// O(V^3). The only failure mode is the matrix allocation itself, which
    /// leaves no partial state behind. The adjacency form is not required;
    /// the relaxation works straight off the edge list.
    pub fn compute<W, G>(&self, graph: &G) -> Result<SquareMatrix<W>>
    where
        W: Float + Debug + Copy,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut distances = SquareMatrix::new(n, W::infinity())?;
        for i in 0..n {
            distances.set(i, i, W::zero());
        }
        // Overlay direct edges; for parallel edges the cheaper one wins,
        // matching what per-edge relaxation converges on.
        for (from, to, weight) in graph.edges() {
            if weight < distances.get(from, to) {
                distances.set(from, to, weight);
            }
        }

        // The recurrence requires k outermost: after iteration k, every
        // (i, j) cell holds the shortest path using only intermediate
        // vertices < k + 1.
        for k in 0..n {
            for i in 0..n {
                let through_k = distances.get(i, k);
                if !through_k.is_finite() {
                    continue;
                }
                for j in 0..n {
                    let candidate = through_k + distances.get(k, j);
                    if candidate < distances.get(i, j) {
                        distances.set(i, j, candidate);
                    }
                }
            }
        }
        Ok(distances)
    }
}
