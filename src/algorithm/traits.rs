use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use log::warn;
use num_traits::Float;
use crate::graph::{Graph, VertexId};
use crate::Result;

/// Counters collected while a search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices taken out of the queue
    pub settled: usize,

    /// Edges examined during relaxation
    pub relaxations: usize,

    /// Relaxations that improved a tentative distance
    pub improvements: usize,
}

/// Result of a shortest path algorithm execution.
///
/// This is per-run state: it is built fresh by every call and never stored on the
/// graph, so several results for the same graph can coexist.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Distances from source to each vertex; unreachable vertices hold infinity
    pub distances: HashMap<VertexId, W>,

    /// For each improved vertex, the vertex that last improved it
    pub parents: HashMap<VertexId, VertexId>,

    /// Source vertex handle
    pub source: VertexId,

    pub stats: SearchStats,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Distance from the source, infinity when unreachable or unknown
    pub fn distance(&self, target: VertexId) -> W {
        self.distances.get(&target).copied().unwrap_or_else(W::infinity)
    }

    pub fn is_reachable(&self, target: VertexId) -> bool {
        self.distance(target).is_finite()
    }

    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parents.get(&vertex).copied()
    }

    /// Walks the parent chain back from `target` and returns the path from the
    /// source to `target`, or `None` when there is no path.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut visited = HashSet::from([target]);
        let mut current = target;

        while current != self.source {
            // A vertex with no parent that is not the source breaks the chain
            let parent = self.parent(current)?;
            if !visited.insert(parent) {
                warn!("cycle detected in parent chain at vertex {}", parent);
                return None;
            }
            path.push(parent);
            current = parent;
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: VertexId)
        -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(
        &self,
        result: &ShortestPathResult<W>,
        target: VertexId,
    ) -> Option<Vec<VertexId>> {
        result.path_to(target)
    }
}
