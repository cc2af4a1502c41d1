use crate::graph::{AdjListGraph, Directedness, Graph, MutableGraph, Vertex};
use crate::{Error, Result};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Configuration for reading graph tables
#[derive(Debug, Clone, Copy, Default)]
pub struct LoaderOptions {
    /// Directedness of the graphs produced
    pub directedness: Directedness,
}

impl LoaderOptions {
    /// Set whether loaded graphs are directed or undirected
    pub fn with_directedness(mut self, directedness: Directedness) -> Self {
        self.directedness = directedness;
        self
    }
}

/// Builds graphs from whitespace-separated weight tables.
///
/// The input starts with the vertex count `N`, followed by `N` vertex names. Then
/// come up to `N` rows, each a row label followed by up to `N` weights. A positive
/// weight in row `A`, column `B` is an edge from `A` to the `B`-th vertex; zero or
/// negative weights mean no edge.
///
/// ```text
/// 3
/// A B C
/// A 0 2 10
/// B 0 0 3
/// C 0 0 0
/// ```
///
/// Any token that is not a finite number starts a new row, so vertex names must
/// not look like numbers.
#[derive(Debug, Clone, Default)]
pub struct GraphLoader {
    options: LoaderOptions,
}

impl GraphLoader {
    pub fn new(options: LoaderOptions) -> Self {
        GraphLoader { options }
    }

    /// Reads a graph from a file
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<AdjListGraph<f64>> {
        let path = path.as_ref();
        debug!("loading graph from {}", path.display());
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file))
    }

    /// Reads a graph from any buffered reader
    pub fn load_reader<R: BufRead>(&self, mut reader: R) -> Result<AdjListGraph<f64>> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        self.load_str(&input)
    }

    /// Parses a graph from text already in memory
    pub fn load_str(&self, input: &str) -> Result<AdjListGraph<f64>> {
        let mut tokens = input.split_whitespace();

        let count_token = tokens
            .next()
            .ok_or_else(|| Error::MalformedInput("missing vertex count".to_string()))?;
        let count: usize = count_token.parse().map_err(|_| {
            Error::MalformedInput(format!(
                "vertex count must be a non-negative integer, found '{}'",
                count_token
            ))
        })?;

        let mut graph: AdjListGraph<f64> = AdjListGraph::new(self.options.directedness);
        // The count is untrusted until the names are actually there
        let mut names = Vec::new();
        let mut ids = Vec::new();
        for found in 0..count {
            let name = tokens.next().ok_or_else(|| {
                Error::MalformedInput(format!("expected {} vertex names, found {}", count, found))
            })?;
            names.push(name);
            ids.push(graph.add_vertex(Vertex::new(name)));
        }

        // Row and column of the next weight; no row until the first label is seen
        let mut row: Option<usize> = None;
        let mut column = 0;

        for token in tokens {
            match parse_weight(token) {
                None => {
                    warn_if_short(row, column, count);
                    let next = row.map_or(0, |r| r + 1);
                    if next >= count {
                        return Err(Error::MalformedInput(format!(
                            "row '{}' exceeds the {} declared vertices",
                            token, count
                        )));
                    }
                    if token != names[next] {
                        warn!(
                            "row {} is labelled '{}' but vertex {} is '{}'",
                            next, token, next, names[next]
                        );
                    }
                    row = Some(next);
                    column = 0;
                }
                Some(weight) => {
                    let r = row.ok_or_else(|| {
                        Error::MalformedInput(format!(
                            "weight '{}' appears before the first row label",
                            token
                        ))
                    })?;
                    if column >= count {
                        return Err(Error::MalformedInput(format!(
                            "row '{}' has more than {} weights",
                            names[r], count
                        )));
                    }
                    if weight > 0.0 {
                        graph.add_edge(ids[r], ids[column], weight)?;
                    }
                    column += 1;
                }
            }
        }
        warn_if_short(row, column, count);

        debug!("loaded {} vertices and {} edges", count, graph.edge_count());
        Ok(graph)
    }
}

/// A token counts as a weight only if it is a finite number, which keeps names
/// such as "Nan" or "Inf" usable as row labels.
fn parse_weight(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|weight| weight.is_finite())
}

fn warn_if_short(row: Option<usize>, column: usize, count: usize) {
    if let Some(r) = row {
        if column < count {
            warn!("row {} has {} of {} weights; the rest are treated as absent", r, column, count);
        }
    }
}
