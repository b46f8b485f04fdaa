use std::fmt::Debug;

use log::debug;
use num_traits::Float;

use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A weighted directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Edge { from, to, weight }
    }
}

/// Per-vertex neighbor spans over one flattened `(target, weight)` buffer.
///
/// `offsets` has `vertex_count + 1` entries; the neighbors of vertex `v`
/// occupy `neighbors[offsets[v]..offsets[v + 1]]`, in the same relative
/// order as the edge list, so enumeration stays deterministic.
#[derive(Debug, Clone)]
struct Adjacency<W> {
    offsets: Vec<usize>,
    neighbors: Vec<(usize, W)>,
}

/// An immutable-after-construction weighted directed graph, stored as a flat
/// edge list plus an optional derived adjacency representation.
///
/// Construction validates that every endpoint lies in `[0, V)` and every
/// weight is finite and strictly positive; nothing downstream re-checks
/// either. The adjacency form is required by [`Dijkstra`], not by
/// [`FloydWarshall`], and is built on demand.
///
/// [`Dijkstra`]: crate::algorithm::Dijkstra
/// [`FloydWarshall`]: crate::algorithm::FloydWarshall
#[derive(Debug, Clone)]
pub struct CompactGraph<W>
where
    W: Float + Debug + Copy,
{
    vertex_count: usize,
    edges: Vec<Edge<W>>,
    adjacency: Option<Adjacency<W>>,
}

impl<W> CompactGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Builds a graph from an edge list, without the adjacency form.
    ///
    /// Errors with `InvalidVertex` for an endpoint outside `[0, vertex_count)`
    /// and `NonPositiveWeight` for a weight that is zero, negative, or not
    /// finite.
    pub fn from_edges(vertex_count: usize, edges: Vec<Edge<W>>) -> Result<Self> {
        for edge in &edges {
            if edge.from >= vertex_count {
                return Err(Error::InvalidVertex(edge.from));
            }
            if edge.to >= vertex_count {
                return Err(Error::InvalidVertex(edge.to));
            }
            if !(edge.weight > W::zero()) || !edge.weight.is_finite() {
                return Err(Error::NonPositiveWeight(
                    edge.weight.to_f64().unwrap_or(f64::NAN),
                ));
            }
        }
        Ok(CompactGraph {
            vertex_count,
            edges,
            adjacency: None,
        })
    }

    /// Builds a graph and its adjacency form in one step.
    pub fn with_adjacency(vertex_count: usize, edges: Vec<Edge<W>>) -> Result<Self> {
        let mut graph = CompactGraph::from_edges(vertex_count, edges)?;
        graph.build_adjacency()?;
        Ok(graph)
    }

    /// Derives the per-vertex adjacency spans from the edge list.
    ///
    /// Stable with respect to the edge list: for each vertex, neighbors keep
    /// the order in which their edges appear. Idempotent; fails only when the
    /// flattened buffers cannot be allocated, in which case no adjacency is
    /// attached.
    pub fn build_adjacency(&mut self) -> Result<()> {
        if self.adjacency.is_some() {
            return Ok(());
        }
        let mut offsets = Vec::new();
        offsets.try_reserve_exact(self.vertex_count + 1)?;
        offsets.resize(self.vertex_count + 1, 0usize);
        for edge in &self.edges {
            offsets[edge.from + 1] += 1;
        }
        for v in 0..self.vertex_count {
            offsets[v + 1] += offsets[v];
        }

        let mut cursors = Vec::new();
        cursors.try_reserve_exact(self.vertex_count)?;
        cursors.extend_from_slice(&offsets[..self.vertex_count]);

        let mut neighbors = Vec::new();
        neighbors.try_reserve_exact(self.edges.len())?;
        neighbors.resize(self.edges.len(), (0usize, W::zero()));
        for edge in &self.edges {
            neighbors[cursors[edge.from]] = (edge.to, edge.weight);
            cursors[edge.from] += 1;
        }

        debug!(
            "built adjacency for {} vertices, {} edges",
            self.vertex_count,
            self.edges.len()
        );
        self.adjacency = Some(Adjacency { offsets, neighbors });
        Ok(())
    }

    /// Returns the raw edge list, in construction order.
    pub fn edge_slice(&self) -> &[Edge<W>] {
        &self.edges
    }
}

impl<W> Graph<W> for CompactGraph<W>
where
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_> {
        Box::new(self.edges.iter().map(|e| (e.from, e.to, e.weight)))
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match &self.adjacency {
            Some(adjacency) if vertex < self.vertex_count => {
                let span = adjacency.offsets[vertex]..adjacency.offsets[vertex + 1];
                Box::new(adjacency.neighbors[span].iter().copied())
            }
            _ => Box::new(std::iter::empty()),
        }
    }

    fn adjacency_ready(&self) -> bool {
        self.adjacency.is_some()
    }
}
