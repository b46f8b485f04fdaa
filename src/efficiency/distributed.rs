//! Message-passing execution: a coordinator thread broadcasts the graph to
//! ranked worker threads over channels and reduces their partial sums.
//!
//! This mirrors a broadcast-then-reduce collective: workers never see the
//! coordinator's graph, only the raw vertex count and edge buffer sent to
//! them, from which each builds its own local graph and adjacency. The
//! calling thread acts as rank 0 and is the only one that ingests input,
//! normalizes, or reports.

use std::sync::mpsc;
use std::thread;

use log::{debug, warn};

use crate::algorithm::Dijkstra;
use crate::efficiency::{dense, normalize, partial_from_distances};
use crate::graph::{CompactGraph, Edge, Graph};
use crate::{Error, Result};

/// The one-shot message every worker blocks on before computing.
enum Broadcast {
    /// Full graph transfer: vertex count plus the entire edge buffer.
    Graph {
        vertex_count: usize,
        edges: Vec<Edge<f64>>,
    },
    /// Coordinator-side ingestion failed; exit without computing.
    Abort,
}

/// Per-rank unit of work, run by the coordinator as rank 0 and by every
/// worker thread on its locally rebuilt graph.
type RankJob = fn(rank: usize, workers: usize, graph: &CompactGraph<f64>) -> Result<f64>;

/// Computes the efficiency across `workers` message-passing ranks.
///
/// Sources are striped round-robin (`source % workers == rank`); each rank
/// accumulates a private partial sum which a single reduce-to-coordinator
/// pass combines before the one normalization. The result matches the
/// sequential and shared-memory strategies up to floating-point
/// reassociation.
///
/// Validation failures on the coordinator abort the whole worker group
/// before any broadcast, so no worker blocks forever.
pub fn distributed(vertex_count: usize, edges: Vec<Edge<f64>>, workers: usize) -> Result<f64> {
    let (local, partials) = run_cluster(vertex_count, edges, workers, striped_partial)?;
    let total = local + partials.iter().sum::<f64>();
    Ok(normalize(total, vertex_count))
}

/// Broadcast-replicated all-pairs run: every rank redundantly computes the
/// full Floyd-Warshall matrix of its local graph and reports the dense
/// efficiency, which the coordinator checks against its own.
///
/// There is no work partitioning here; the variant exists to exercise the
/// full-graph data movement, not to speed anything up.
pub fn all_pairs_distributed(
    vertex_count: usize,
    edges: Vec<Edge<f64>>,
    workers: usize,
) -> Result<f64> {
    let (local, replicas) = run_cluster(vertex_count, edges, workers, replicated_dense)?;
    for (index, value) in replicas.iter().enumerate() {
        if !values_agree(local, *value) {
            warn!(
                "replica {index} disagrees with coordinator: {value} vs {local}"
            );
        }
    }
    Ok(local)
}

/// Spawns `workers - 1` ranked threads, broadcasts the graph (or an abort),
/// runs `job` as rank 0 on the calling thread, and gathers one value per
/// worker.
fn run_cluster(
    vertex_count: usize,
    edges: Vec<Edge<f64>>,
    workers: usize,
    job: RankJob,
) -> Result<(f64, Vec<f64>)> {
    if workers == 0 {
        return Err(Error::NoWorkers);
    }

    let (reduce_tx, reduce_rx) = mpsc::channel::<(usize, f64)>();
    let mut broadcast = Vec::with_capacity(workers - 1);
    let mut handles = Vec::with_capacity(workers - 1);
    for rank in 1..workers {
        let (tx, rx) = mpsc::channel::<Broadcast>();
        let reduce_tx = reduce_tx.clone();
        let handle = thread::Builder::new()
            .name(format!("efficiency-worker-{rank}"))
            .spawn(move || worker_loop(rank, workers, job, rx, reduce_tx))?;
        broadcast.push(tx);
        handles.push(handle);
    }
    // Keep only the workers' clones alive, so a lost worker group surfaces
    // as a closed reduce channel instead of a hang.
    drop(reduce_tx);

    // Ingestion and validation happen only on the coordinator. On failure,
    // abort the whole group: a worker must never block on a broadcast that
    // will not arrive.
    let graph = match CompactGraph::with_adjacency(vertex_count, edges) {
        Ok(graph) => graph,
        Err(err) => {
            for tx in &broadcast {
                let _ = tx.send(Broadcast::Abort);
            }
            join_all(handles);
            return Err(err);
        }
    };

    debug!(
        "broadcasting {} vertices, {} edges to {} workers",
        vertex_count,
        graph.edge_count(),
        workers - 1
    );
    for tx in &broadcast {
        let message = Broadcast::Graph {
            vertex_count,
            edges: graph.edge_slice().to_vec(),
        };
        let _ = tx.send(message);
    }
    drop(broadcast);

    let local = match job(0, workers, &graph) {
        Ok(value) => value,
        Err(err) => {
            // Closing the reduce channel lets workers finish and exit.
            drop(reduce_rx);
            join_all(handles);
            return Err(err);
        }
    };

    let mut partials = Vec::with_capacity(workers - 1);
    while partials.len() < workers - 1 {
        match reduce_rx.recv() {
            Ok((_rank, value)) => partials.push(value),
            // A worker exited without reporting; stop waiting and let the
            // join below surface its error.
            Err(_) => break,
        }
    }

    let mut first_err = None;
    for handle in handles {
        match handle.join() {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                first_err.get_or_insert(err);
            }
            Err(_) => {
                first_err.get_or_insert(Error::WorkerPanicked);
            }
        }
    }
    if partials.len() < workers - 1 {
        return Err(first_err.unwrap_or(Error::WorkerPanicked));
    }
    Ok((local, partials))
}

fn worker_loop(
    rank: usize,
    workers: usize,
    job: RankJob,
    rx: mpsc::Receiver<Broadcast>,
    reduce_tx: mpsc::Sender<(usize, f64)>,
) -> Result<()> {
    match rx.recv() {
        Ok(Broadcast::Graph {
            vertex_count,
            edges,
        }) => {
            // The buffer was validated on the coordinator before broadcast;
            // rebuilding can only fail on allocation.
            let graph = CompactGraph::with_adjacency(vertex_count, edges)?;
            let value = job(rank, workers, &graph)?;
            let _ = reduce_tx.send((rank, value));
            Ok(())
        }
        // Abort, or a coordinator that went away before broadcasting.
        Ok(Broadcast::Abort) | Err(_) => Ok(()),
    }
}

/// Reciprocal partial sum over this rank's striped share of the sources,
/// reusing one distance buffer across them.
fn striped_partial(rank: usize, workers: usize, graph: &CompactGraph<f64>) -> Result<f64> {
    let dijkstra = Dijkstra::new();
    let mut buffer = Vec::new();
    let mut total = 0.0;
    let mut source = rank;
    while source < graph.vertex_count() {
        dijkstra.compute_into(graph, source, &mut buffer)?;
        total += partial_from_distances(source, &buffer);
        source += workers;
    }
    Ok(total)
}

fn replicated_dense(_rank: usize, _workers: usize, graph: &CompactGraph<f64>) -> Result<f64> {
    dense(graph)
}

fn join_all(handles: Vec<thread::JoinHandle<Result<()>>>) {
    for handle in handles {
        let _ = handle.join();
    }
}

fn values_agree(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= 1e-9 * scale
}
