//! Global efficiency of weighted directed graphs.
//!
//! The efficiency of a graph is the mean over all ordered vertex pairs
//! (i != j) of the reciprocal of the shortest-path distance from i to j,
//! with unreachable pairs contributing zero. This crate computes it three
//! ways, all converging on the same value within floating-point tolerance:
//!
//! - densely, from the full distance matrix of the Floyd-Warshall algorithm,
//! - per source, running Dijkstra's algorithm over an indexed min-heap once
//!   per vertex and accumulating reciprocals,
//! - in parallel, spreading the per-source runs over a shared-memory worker
//!   pool or over message-passing workers that receive the graph by
//!   broadcast and reduce partial sums back to a coordinator.
//!
//! Graphs are immutable once built and edge weights must be strictly
//! positive, a precondition of Dijkstra's greedy argument.

pub mod algorithm;
pub mod data_structures;
pub mod efficiency;
pub mod graph;
pub mod io;

pub use algorithm::{Dijkstra, FloydWarshall};
pub use data_structures::{IndexedMinHeap, SquareMatrix};
/// Re-export main types for convenient use
pub use graph::{CompactGraph, Edge, Graph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Non-positive edge weight: {0}")]
    NonPositiveWeight(f64),

    #[error("Adjacency representation has not been built")]
    AdjacencyMissing,

    #[error("Allocation failed: {0}")]
    Allocation(#[from] std::collections::TryReserveError),

    #[error("Malformed edge list at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("Worker count must be at least one")]
    NoWorkers,

    #[error("A worker exited without reporting its partial result")]
    WorkerPanicked,

    #[error("Thread pool construction failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
