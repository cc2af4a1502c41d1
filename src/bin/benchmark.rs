use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use graph_sssp::graph::generators::generate_random;
use graph_sssp::graph::{AdjListGraph, Graph};
use graph_sssp::{shortest_paths_from_all, Dijkstra, Directedness, ShortestPathAlgorithm};

// Time a single-source run from the first vertex
fn benchmark_single_source(graph: &AdjListGraph<f64>) -> Duration {
    let dijkstra = Dijkstra::new();
    let source = match graph.vertices().next() {
        Some(source) => source,
        None => return Duration::ZERO,
    };

    let start = Instant::now();
    let result = match dijkstra.compute_shortest_paths(graph, source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("  - search failed: {}", err);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    let reachable = result.distances.values().filter(|d| d.is_finite()).count();
    println!(
        "  - single source: {} reachable vertices, {} relaxations in {:?}",
        reachable, result.stats.relaxations, duration
    );

    duration
}

// Time searches from every vertex, run in parallel
fn benchmark_all_sources(graph: &AdjListGraph<f64>) -> Duration {
    let start = Instant::now();
    let outcome = shortest_paths_from_all(&Dijkstra::new(), graph);
    let duration = start.elapsed();

    match outcome {
        Ok(results) => println!("  - all sources: {} searches in {:?}", results.len(), duration),
        Err(err) => eprintln!("  - all sources failed: {}", err),
    }

    duration
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![100, 500, 1_000, 5_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: Dijkstra single source vs all sources");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        for directedness in [Directedness::Directed, Directedness::Undirected] {
            println!("\nGenerating {:?} graph with {} vertices...", directedness, size);
            let graph = match generate_random(&mut rng, size, edge_factor, directedness) {
                Ok(graph) => graph,
                Err(err) => {
                    eprintln!("  - generation failed: {}", err);
                    continue;
                }
            };
            println!(
                "Graph has {} vertices and {} edges",
                graph.vertex_count(),
                graph.edge_count()
            );

            let single = benchmark_single_source(&graph);
            let all = benchmark_all_sources(&graph);
            results.push((size, directedness, single, all));
        }
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15} | {:<15}", "Vertices", "Kind", "Single (ms)", "All (ms)");
    println!("-----------------------------------------------------");

    for (size, directedness, single, all) in &results {
        println!(
            "{:<10} | {:<10} | {:<15.3} | {:<15.3}",
            size,
            format!("{:?}", directedness),
            single.as_secs_f64() * 1000.0,
            all.as_secs_f64() * 1000.0
        );
    }
}
