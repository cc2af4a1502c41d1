use std::collections::HashMap;
use std::fmt::Debug;
use log::debug;
use num_traits::Float;
use rayon::prelude::*;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, VertexId};
use crate::Result;

/// Runs `algorithm` once from every vertex of `graph`, in parallel.
///
/// Each run only reads the graph and keeps its own state, so the runs are
/// independent. The first error stops the batch and is returned.
pub fn shortest_paths_from_all<W, G, A>(
    algorithm: &A,
    graph: &G,
) -> Result<HashMap<VertexId, ShortestPathResult<W>>>
where
    W: Float + Debug + Send,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    let sources: Vec<VertexId> = graph.vertices().collect();
    debug!(
        "running {} from {} sources",
        algorithm.name(),
        sources.len()
    );

    sources
        .into_par_iter()
        .map(|source| {
            algorithm
                .compute_shortest_paths(graph, source)
                .map(|result| (source, result))
        })
        .collect()
}
