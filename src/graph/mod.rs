pub mod adj_list;
pub mod generators;
pub mod loader;
pub mod traits;
pub mod vertex;

pub use adj_list::AdjListGraph;
pub use traits::{Graph, MutableGraph};
pub use vertex::{Vertex, VertexId};

/// Whether edges are one-way or two-way; fixed when a graph is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Directedness {
    /// Edge (i,j) and edge (j,i) are independent
    #[default]
    Directed,
    /// Edge (i,j) exists exactly when edge (j,i) exists, with the same weight
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        self == Directedness::Directed
    }
}
