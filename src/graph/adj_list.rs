use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::vertex::{Vertex, VertexId};
use crate::graph::Directedness;
use crate::{Error, Result};
use log::trace;
use num_traits::Float;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display};

/// A weighted graph implementation using adjacency lists.
///
/// The graph owns its vertices; each vertex keeps its own outgoing edges keyed by
/// neighbor handle. Undirected graphs store every edge twice, once per endpoint, and
/// all edge mutations go through the graph so the two halves never disagree.
#[derive(Debug, Clone)]
pub struct AdjListGraph<W>
where
    W: Float + Debug,
{
    /// Fixed at construction
    directedness: Directedness,

    /// Vertices keyed by handle. Handles grow monotonically, so key order is
    /// insertion order.
    vertices: BTreeMap<VertexId, Vertex<W>>,

    /// Next handle to issue
    next_id: usize,
}

impl<W> AdjListGraph<W>
where
    W: Float + Debug,
{
    /// Creates a new empty graph
    pub fn new(directedness: Directedness) -> Self {
        AdjListGraph {
            directedness,
            vertices: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Creates a new empty directed graph
    pub fn directed() -> Self {
        Self::new(Directedness::Directed)
    }

    /// Creates a new empty undirected graph
    pub fn undirected() -> Self {
        Self::new(Directedness::Undirected)
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    /// Looks up a vertex by handle
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<W>> {
        self.vertices.get(&id)
    }

    /// Finds the first inserted vertex with the given name
    pub fn vertex_by_name(&self, name: &str) -> Option<VertexId> {
        self.vertices
            .iter()
            .find(|(_, vertex)| vertex.name() == name)
            .map(|(&id, _)| id)
    }

    fn lookup(&self, operation: &'static str, vertex: VertexId) -> Result<&Vertex<W>> {
        self.vertices
            .get(&vertex)
            .ok_or(Error::IllegalVertex { operation, vertex })
    }

    fn lookup_mut(&mut self, operation: &'static str, vertex: VertexId) -> Result<&mut Vertex<W>> {
        self.vertices
            .get_mut(&vertex)
            .ok_or(Error::IllegalVertex { operation, vertex })
    }

    fn count_incoming(&self, vertex: VertexId) -> usize {
        self.vertices.values().filter(|v| v.has_edge(vertex)).count()
    }
}

impl<W> Default for AdjListGraph<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new(Directedness::default())
    }
}

impl<W> Graph<W> for AdjListGraph<W>
where
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        let half_edges: usize = self.vertices.values().map(|v| v.out_degree()).sum();
        match self.directedness {
            Directedness::Directed => half_edges,
            Directedness::Undirected => half_edges / 2,
        }
    }

    fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.keys().copied())
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains_key(&vertex)
    }

    fn vertex_name(&self, vertex: VertexId) -> Result<&str> {
        Ok(self.lookup("vertex_name", vertex)?.name())
    }

    fn outgoing_edges(
        &self,
        vertex: VertexId,
    ) -> Result<Box<dyn Iterator<Item = (VertexId, W)> + '_>> {
        Ok(Box::new(self.lookup("outgoing_edges", vertex)?.edges()))
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> Result<bool> {
        self.lookup("has_edge", to)?;
        Ok(self.lookup("has_edge", from)?.has_edge(to))
    }

    fn edge_weight(&self, from: VertexId, to: VertexId) -> Result<W> {
        self.lookup("edge_weight", to)?;
        Ok(self.lookup("edge_weight", from)?.edge_weight(to))
    }

    fn adjacent_vertices(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        Ok(self
            .lookup("adjacent_vertices", vertex)?
            .adjacent_vertices()
            .collect())
    }

    fn in_degree(&self, vertex: VertexId) -> Result<usize> {
        self.lookup("in_degree", vertex)?;
        Ok(self.count_incoming(vertex))
    }

    fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        Ok(self.lookup("out_degree", vertex)?.out_degree())
    }
}

impl<W> MutableGraph<W> for AdjListGraph<W>
where
    W: Float + Debug,
{
    fn add_vertex(&mut self, vertex: Vertex<W>) -> VertexId {
        let id = VertexId(self.next_id);
        self.next_id += 1;
        trace!("adding vertex {} as {}", vertex.name(), id);
        self.vertices.insert(id, vertex);
        id
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Result<Vertex<W>> {
        let removed = self
            .vertices
            .remove(&vertex)
            .ok_or(Error::IllegalVertex {
                operation: "remove_vertex",
                vertex,
            })?;

        // Nobody may keep pointing at the defunct vertex
        for other in self.vertices.values_mut() {
            other.remove_edge(vertex);
        }

        trace!("removed vertex {} ({})", removed.name(), vertex);
        Ok(removed)
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<()> {
        self.lookup("add_edge", to)?;
        self.lookup_mut("add_edge", from)?.add_edge(to, weight);

        if !self.is_directed() {
            self.lookup_mut("add_edge", to)?.add_edge(from, weight);
        }

        Ok(())
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.lookup("remove_edge", to)?;
        let source = self.lookup_mut("remove_edge", from)?;
        if source.remove_edge(to).is_none() {
            return Err(Error::IllegalVertex {
                operation: "remove_edge",
                vertex: to,
            });
        }

        if !self.is_directed() {
            self.lookup_mut("remove_edge", to)?.remove_edge(from);
        }

        Ok(())
    }
}

/// Prints the directedness, the edge and vertex counts, then one entry per vertex
/// with its degrees and neighbors.
impl<W> Display for AdjListGraph<W>
where
    W: Float + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.is_directed() { "directed" } else { "undirected" };
        writeln!(f, "This is a {} graph.", direction)?;
        writeln!(
            f,
            "This graph has {} edges and {} vertices:",
            self.edge_count(),
            self.vertex_count()
        )?;

        for (&id, vertex) in &self.vertices {
            writeln!(
                f,
                "{} in degree: {} out degree: {}",
                vertex.name(),
                self.count_incoming(id),
                vertex.out_degree()
            )?;
            write!(f, "\tEdges to:")?;
            for neighbor in vertex.adjacent_vertices() {
                if let Some(target) = self.vertices.get(&neighbor) {
                    write!(f, " {}", target.name())?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
