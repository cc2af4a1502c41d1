use std::fmt::Debug;
use num_traits::Float;

use crate::graph::vertex::{Vertex, VertexId};
use crate::Result;

/// Trait representing a weighted graph, directed or undirected.
///
/// Every query that names a vertex fails with [`crate::Error::IllegalVertex`] when the
/// vertex is not part of the graph.
pub trait Graph<W>: Debug
where
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph.
    ///
    /// This is the sum of all out-degrees. Undirected graphs store every edge as two
    /// directed half-edges, so for them the sum is halved.
    fn edge_count(&self) -> usize;

    /// Returns true if edges are one-way
    fn is_directed(&self) -> bool;

    /// Returns an iterator over all vertex handles, in insertion order
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool;

    /// Returns the name the vertex was created with
    fn vertex_name(&self, vertex: VertexId) -> Result<&str>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: VertexId)
        -> Result<Box<dyn Iterator<Item = (VertexId, W)> + '_>>;

    /// Returns true if there's an edge from `from` to `to`
    fn has_edge(&self, from: VertexId, to: VertexId) -> Result<bool>;

    /// Gets the weight of an edge, or infinity if there is no such edge
    fn edge_weight(&self, from: VertexId, to: VertexId) -> Result<W>;

    /// Gets the handles of all vertices `vertex` has an edge to
    fn adjacent_vertices(&self, vertex: VertexId) -> Result<Vec<VertexId>>;

    /// Number of edges that lead to `vertex`
    fn in_degree(&self, vertex: VertexId) -> Result<usize>;

    /// Number of edges that leave `vertex`
    fn out_degree(&self, vertex: VertexId) -> Result<usize>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Debug,
{
    /// Adds a vertex to the graph and returns its handle.
    ///
    /// No duplicate check is made: two vertices may share a name and are still
    /// distinct vertices.
    fn add_vertex(&mut self, vertex: Vertex<W>) -> VertexId;

    /// Removes a vertex along with every edge that points at it
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<Vertex<W>>;

    /// Adds an edge between vertices with the given weight, replacing an existing one.
    /// Undirected graphs get the reverse edge as well.
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<()>;

    /// Adds an edge with the default weight of one
    fn add_unit_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.add_edge(from, to, W::one())
    }

    /// Removes an existing edge. Undirected graphs lose the reverse edge as well.
    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<()>;
}
