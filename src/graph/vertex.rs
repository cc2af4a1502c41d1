use num_traits::Float;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display};

/// Stable handle for a vertex, issued by the graph that owns it.
///
/// Handles are handed out in increasing order and never reused, so comparing two
/// handles compares the insertion order of their vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Returns the raw index behind this handle
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named vertex together with its outgoing edges.
///
/// Edges are keyed by the neighbor's handle and carry a weight. Only the owning
/// graph may change them: going through the graph is what keeps undirected edges
/// symmetric and removed vertices out of every adjacency map.
#[derive(Debug, Clone)]
pub struct Vertex<W>
where
    W: Float + Debug,
{
    name: String,
    edges: BTreeMap<VertexId, W>,
}

impl<W> Vertex<W>
where
    W: Float + Debug,
{
    /// Creates a standalone vertex with no edges
    pub fn new(name: impl Into<String>) -> Self {
        Vertex {
            name: name.into(),
            edges: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the edge to `neighbor`, replacing any previous weight
    pub(crate) fn add_edge(&mut self, neighbor: VertexId, weight: W) {
        self.edges.insert(neighbor, weight);
    }

    pub(crate) fn remove_edge(&mut self, neighbor: VertexId) -> Option<W> {
        self.edges.remove(&neighbor)
    }

    pub fn has_edge(&self, neighbor: VertexId) -> bool {
        self.edges.contains_key(&neighbor)
    }

    /// Gets the weight of the edge to `neighbor`, or infinity if there is none
    pub fn edge_weight(&self, neighbor: VertexId) -> W {
        self.edges.get(&neighbor).copied().unwrap_or_else(W::infinity)
    }

    /// Handles of every vertex this one has an edge to, in ascending order
    pub fn adjacent_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.edges.keys().copied()
    }

    /// Outgoing edges as `(neighbor, weight)` pairs, in ascending neighbor order
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, W)> + '_ {
        self.edges.iter().map(|(&neighbor, &weight)| (neighbor, weight))
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vertex_keeps_its_name_and_has_no_edges() {
        let v: Vertex<f64> = Vertex::new("Tokyo");
        assert_eq!(v.name(), "Tokyo");
        assert_eq!(v.out_degree(), 0);
        assert_eq!(v.adjacent_vertices().count(), 0);
    }

    #[test]
    fn missing_edge_has_infinite_weight() {
        let v: Vertex<f64> = Vertex::new("A");
        assert!(!v.has_edge(VertexId(3)));
        assert_eq!(v.edge_weight(VertexId(3)), f64::INFINITY);
    }

    #[test]
    fn add_edge_overwrites_and_remove_edge_returns_weight() {
        let mut v: Vertex<f64> = Vertex::new("A");
        v.add_edge(VertexId(2), 4.0);
        v.add_edge(VertexId(2), 7.5);
        assert_eq!(v.out_degree(), 1);
        assert_eq!(v.edge_weight(VertexId(2)), 7.5);

        assert_eq!(v.remove_edge(VertexId(2)), Some(7.5));
        assert_eq!(v.remove_edge(VertexId(2)), None);
        assert_eq!(v.out_degree(), 0);
    }

    #[test]
    fn no_implicit_self_loop() {
        let mut v: Vertex<f64> = Vertex::new("A");
        assert!(!v.has_edge(VertexId(0)));
        v.add_edge(VertexId(0), 2.0);
        assert!(v.has_edge(VertexId(0)));
    }

    #[test]
    fn adjacent_vertices_are_sorted_by_handle() {
        let mut v: Vertex<f64> = Vertex::new("A");
        v.add_edge(VertexId(5), 1.0);
        v.add_edge(VertexId(1), 1.0);
        v.add_edge(VertexId(3), 1.0);
        let adjacent: Vec<_> = v.adjacent_vertices().collect();
        assert_eq!(adjacent, vec![VertexId(1), VertexId(3), VertexId(5)]);
    }
}
