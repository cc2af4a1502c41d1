use graph_sssp::cli::CliConfig;
use graph_sssp::graph::Graph;
use graph_sssp::{Dijkstra, GraphLoader, LoaderOptions, PathReport, ShortestPathAlgorithm};
use log::info;
use std::{env, process};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = match CliConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    let options = LoaderOptions::default().with_directedness(config.directedness);
    let graph = GraphLoader::new(options).load_path(&config.graph_file)?;
    info!(
        "loaded {} with {} vertices and {} edges",
        config.graph_file.display(),
        graph.vertex_count(),
        graph.edge_count()
    );

    if config.print_graph {
        print!("{}", graph);
    }

    let source = graph
        .vertex_by_name(&config.source)
        .ok_or_else(|| format!("unknown source vertex '{}'", config.source))?;
    let target = graph
        .vertex_by_name(&config.target)
        .ok_or_else(|| format!("unknown target vertex '{}'", config.target))?;

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, source)?;
    let report = PathReport::new(&graph, &result, target)?;

    if config.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }

    Ok(())
}
