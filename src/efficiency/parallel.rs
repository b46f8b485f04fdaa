use log::debug;
use rayon::prelude::*;

use crate::algorithm::Dijkstra;
use crate::efficiency::{normalize, partial_from_distances};
use crate::graph::Graph;
use crate::{Error, Result};

/// Computes the efficiency on a shared-memory pool of exactly `workers`
/// threads.
///
/// The graph is shared read-only across the pool; each worker owns its
/// distance buffer and heap, so the per-source loop body needs no locking.
/// Per-item partial sums are combined by a commutative reduction, which
/// makes the result independent of how rayon splits the source range, up to
/// floating-point reassociation.
pub fn parallel<G>(graph: &G, workers: usize) -> Result<f64>
where
    G: Graph<f64> + Sync,
{
    if workers == 0 {
        return Err(Error::NoWorkers);
    }
    let n = graph.vertex_count();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;
    debug!("parallel efficiency over {n} sources on {workers} workers");

    let total = pool.install(|| {
        (0..n)
            .into_par_iter()
            .map_init(
                // One distance buffer per rayon split, reused across the
                // sources of that split.
                Vec::new,
                |buffer, source| {
                    Dijkstra::new().compute_into(graph, source, buffer)?;
                    Ok::<f64, Error>(partial_from_distances(source, buffer))
                },
            )
            .try_reduce(|| 0.0, |a, b| Ok(a + b))
    })?;

    Ok(normalize(total, n))
}
