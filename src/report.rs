use serde::Serialize;
use std::fmt::{self, Display};

use crate::algorithm::ShortestPathResult;
use crate::graph::{AdjListGraph, Graph, VertexId};
use crate::Result;

/// Summary of one source-to-target query, ready to print or serialize
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub source: String,
    pub target: String,
    /// `None` when the target is unreachable
    pub distance: Option<f64>,
    /// Vertex names from source to target, empty when unreachable
    pub path: Vec<String>,
}

impl PathReport {
    pub fn new(
        graph: &AdjListGraph<f64>,
        result: &ShortestPathResult<f64>,
        target: VertexId,
    ) -> Result<Self> {
        let path = match result.path_to(target) {
            Some(path) => path
                .into_iter()
                .map(|v| graph.vertex_name(v).map(str::to_string))
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(PathReport {
            source: graph.vertex_name(result.source)?.to_string(),
            target: graph.vertex_name(target)?.to_string(),
            distance: Some(result.distance(target)).filter(|d| d.is_finite()),
            path,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.distance {
            Some(distance) => {
                writeln!(f, "The shortest path is {}", distance)?;
                write!(f, "{}", self.path.join("::"))
            }
            None => write!(f, "There is no path from {} to {}", self.source, self.target),
        }
    }
}
