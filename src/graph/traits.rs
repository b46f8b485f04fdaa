use std::fmt::Debug;

use num_traits::Float;

/// Trait representing a read-only weighted directed graph
pub trait Graph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all edges as `(from, to, weight)` triples,
    /// in the order the graph was built from
    fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex.
    ///
    /// Callers must check [`adjacency_ready`](Self::adjacency_ready) first;
    /// a graph without a derived adjacency yields no neighbors.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true once the per-vertex adjacency representation exists
    fn adjacency_ready(&self) -> bool;
}
