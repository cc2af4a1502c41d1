use crate::graph::{AdjListGraph, Directedness, MutableGraph, Vertex, VertexId};
use crate::Result;
use rand::Rng;

/// Generates a random graph with n vertices named `v0..v{n-1}` and about
/// `edge_factor * n` edges with weights in `[1, 100)`.
///
/// A random spanning tree rooted at `v0` is laid first, so every vertex is
/// reachable from `v0`.
pub fn generate_random<R: Rng>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    directedness: Directedness,
) -> Result<AdjListGraph<f64>> {
    let mut graph: AdjListGraph<f64> = AdjListGraph::new(directedness);
    let ids: Vec<VertexId> = (0..n)
        .map(|i| graph.add_vertex(Vertex::new(format!("v{}", i))))
        .collect();

    if n < 2 {
        return Ok(graph);
    }

    // Hang every later vertex off one that is already connected
    for i in 1..n {
        let parent = rng.gen_range(0..i);
        let weight = rng.gen_range(1.0..100.0);
        graph.add_edge(ids[parent], ids[i], weight)?;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in n - 1..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = rng.gen_range(1.0..100.0);
            graph.add_edge(ids[u], ids[v], weight)?;
        }
    }

    Ok(graph)
}

/// Generates a width x height grid with unit-weight edges between 4-neighbors.
///
/// Vertices are named `r{row}c{col}` and inserted row by row; directed grids get
/// edges in both directions.
pub fn generate_grid(
    width: usize,
    height: usize,
    directedness: Directedness,
) -> Result<AdjListGraph<f64>> {
    let mut graph: AdjListGraph<f64> = AdjListGraph::new(directedness);
    let mut ids = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            ids.push(graph.add_vertex(Vertex::new(format!("r{}c{}", y, x))));
        }
    }

    let index = |x: usize, y: usize| y * width + x;
    for y in 0..height {
        for x in 0..width {
            let current = ids[index(x, y)];
            if x + 1 < width {
                connect_both_ways(&mut graph, current, ids[index(x + 1, y)])?;
            }
            if y + 1 < height {
                connect_both_ways(&mut graph, current, ids[index(x, y + 1)])?;
            }
        }
    }

    Ok(graph)
}

fn connect_both_ways(graph: &mut AdjListGraph<f64>, a: VertexId, b: VertexId) -> Result<()> {
    graph.add_edge(a, b, 1.0)?;
    if graph.directedness().is_directed() {
        graph.add_edge(b, a, 1.0)?;
    }
    Ok(())
}
