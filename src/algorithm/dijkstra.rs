use std::fmt::Debug;

use num_traits::Float;

use crate::data_structures::IndexedMinHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Single-source shortest paths via Dijkstra's algorithm over an indexed
/// min-heap.
///
/// All vertices are queued up front (the source at zero, the rest at
/// `+inf`); the main loop extracts the minimum and relaxes its outgoing
/// edges through `decrease_key`. Strictly positive edge weights are a
/// precondition of the greedy argument and are enforced at graph
/// construction, not here.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes distances from `source` to every vertex, `+inf` where
    /// unreachable.
    pub fn compute<W, G>(&self, graph: &G, source: usize) -> Result<Vec<W>>
    where
        W: Float + Debug + Copy,
        G: Graph<W>,
    {
        let mut distances = Vec::new();
        self.compute_into(graph, source, &mut distances)?;
        Ok(distances)
    }

    /// Like [`compute`](Self::compute), but resets and fills a caller-owned
    /// buffer, so per-worker buffers can be reused across sources.
    ///
    /// Errors with `InvalidVertex` for an out-of-range source and
    /// `AdjacencyMissing` when the graph's adjacency form has not been
    /// built.
    pub fn compute_into<W, G>(
        &self,
        graph: &G,
        source: usize,
        distances: &mut Vec<W>,
    ) -> Result<()>
    where
        W: Float + Debug + Copy,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        if !graph.adjacency_ready() {
            return Err(Error::AdjacencyMissing);
        }

        let n = graph.vertex_count();
        distances.clear();
        distances.try_reserve(n)?;
        distances.resize(n, W::infinity());
        distances[source] = W::zero();

        let mut heap = IndexedMinHeap::with_capacity(n)?;
        for vertex in 0..n {
            heap.insert(vertex, distances[vertex])?;
        }

        while let Some((u, dist_u)) = heap.extract_min() {
            if !dist_u.is_finite() {
                // Everything still queued is unreachable from the source.
                continue;
            }
            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u + weight;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    heap.decrease_key(v, candidate)?;
                }
            }
        }
        Ok(())
    }
}
