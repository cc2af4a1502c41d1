//! Graph SSSP - weighted graphs with Dijkstra single-source shortest paths
//!
//! Graphs are stored as adjacency lists owned by an [`AdjListGraph`], which may be
//! directed or undirected. Vertices are addressed through stable [`VertexId`] handles
//! issued by the graph, so adjacency maps never hold references to each other.
//!
//! The shortest-path engine keeps its per-run state (distances, parents, settled set)
//! outside the graph, which means the same graph can be searched repeatedly, or from
//! many sources at once, without being mutated.

pub mod algorithm;
pub mod cli;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use algorithm::{
    batch::shortest_paths_from_all, dijkstra::Dijkstra, SearchStats, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::adj_list::AdjListGraph;
pub use graph::loader::{GraphLoader, LoaderOptions};
pub use graph::vertex::{Vertex, VertexId};
pub use graph::Directedness;
pub use report::PathReport;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Illegal vertex {vertex}: {operation} failed")]
    IllegalVertex {
        operation: &'static str,
        vertex: VertexId,
    },

    #[error("Malformed graph input: {0}")]
    MalformedInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Search cancelled after settling {0} vertices")]
    Cancelled(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
