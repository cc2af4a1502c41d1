use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use log::{debug, trace};
use num_traits::Float;
use ordered_float::OrderedFloat;

use crate::graph::{Graph, VertexId};
use crate::algorithm::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedPriorityQueue;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation.
///
/// Every vertex enters the queue up front, the source at distance zero and the rest
/// at infinity. The closest unsettled vertex is extracted and its outgoing edges are
/// relaxed; an improved neighbor is moved in the queue to its new distance. Among
/// equal distances the vertex inserted into the graph first is extracted first.
///
/// Edge weights must be non-negative. Negative weights are not detected and give
/// meaningless distances.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    /// Checked before each extraction; when set the search stops with `Error::Cancelled`
    cancel: Option<Arc<AtomicBool>>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { cancel: None }
    }

    /// Lets another thread stop a running search by raising `flag`
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: VertexId,
    ) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::IllegalVertex {
                operation: "compute_shortest_paths",
                vertex: source,
            });
        }

        let n = graph.vertex_count();
        let mut distances: HashMap<_, W> = HashMap::with_capacity(n);
        let mut parents = HashMap::new();
        let mut settled = HashSet::with_capacity(n);
        let mut stats = SearchStats::default();

        // All vertices start in the queue, only the source at a finite distance
        let mut queue = IndexedPriorityQueue::new();
        for v in graph.vertices() {
            let initial = if v == source { W::zero() } else { W::infinity() };
            distances.insert(v, initial);
            queue.push(v, OrderedFloat(initial));
        }

        while let Some((u, OrderedFloat(dist_u))) = queue.pop() {
            if self.is_cancelled() {
                debug!("search from {} cancelled after {} vertices", source, stats.settled);
                return Err(Error::Cancelled(stats.settled));
            }

            settled.insert(u);
            stats.settled += 1;

            for (v, weight) in graph.outgoing_edges(u)? {
                if settled.contains(&v) {
                    continue;
                }
                stats.relaxations += 1;

                let candidate = dist_u + weight;
                let current = distances.get(&v).copied().unwrap_or_else(W::infinity);
                if candidate < current {
                    trace!("relaxed {} via {}: {:?} -> {:?}", v, u, current, candidate);
                    distances.insert(v, candidate);
                    parents.insert(v, u);
                    queue.push(v, OrderedFloat(candidate));
                    stats.improvements += 1;
                }
            }
        }

        debug!(
            "search from {} settled {} vertices, {} relaxations, {} improvements",
            source, stats.settled, stats.relaxations, stats.improvements
        );

        Ok(ShortestPathResult {
            distances,
            parents,
            source,
            stats,
        })
    }
}
