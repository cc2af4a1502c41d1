pub mod traits;
pub mod batch;
pub mod dijkstra;

pub use traits::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
