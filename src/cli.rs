use crate::graph::Directedness;
use std::path::PathBuf;

pub const USAGE: &str =
    "usage: shortest_path <graph-file> <source> <target> [--undirected] [--json] [--print-graph]";

/// Settings for the `shortest_path` binary
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub graph_file: PathBuf,
    pub source: String,
    pub target: String,
    pub directedness: Directedness,
    /// Emit the report as JSON instead of text
    pub json: bool,
    /// Dump the loaded graph before searching
    pub print_graph: bool,
}

impl CliConfig {
    /// Parses arguments, not including the program name
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut positional = Vec::new();
        let mut directedness = Directedness::Directed;
        let mut json = false;
        let mut print_graph = false;

        for arg in args {
            match arg.as_str() {
                "--undirected" => directedness = Directedness::Undirected,
                "--directed" => directedness = Directedness::Directed,
                "--json" => json = true,
                "--print-graph" => print_graph = true,
                flag if flag.starts_with("--") => {
                    return Err(format!("unknown option '{}'\n{}", flag, USAGE))
                }
                _ => positional.push(arg),
            }
        }

        let [graph_file, source, target]: [String; 3] = positional
            .try_into()
            .map_err(|args: Vec<String>| {
                format!("expected 3 arguments, got {}\n{}", args.len(), USAGE)
            })?;

        Ok(CliConfig {
            graph_file: PathBuf::from(graph_file),
            source,
            target,
            directedness,
            json,
            print_graph,
        })
    }
}
