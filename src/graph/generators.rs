use crate::graph::AdjacencyMatrix;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with n vertices
///
/// Every ordered pair of distinct vertices gets an edge with probability `density`,
/// weighted uniformly in `1..=max_weight`. The same seed always yields the same matrix.
pub fn generate_random(n: usize, density: f64, max_weight: u32, seed: u64) -> AdjacencyMatrix<u32> {
    assert!(n > 0, "n must be positive");
    assert!((0.0..=1.0).contains(&density), "density must be in [0, 1]");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();

    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(density) {
                edges.push((u, v, rng.gen_range(1..=max_weight)));
            }
        }
    }

    from_generated_edges(n, edges, false)
}

/// Generates a random undirected graph (symmetric matrix) with n vertices
pub fn generate_random_undirected(
    n: usize,
    density: f64,
    max_weight: u32,
    seed: u64,
) -> AdjacencyMatrix<u32> {
    assert!(n > 0, "n must be positive");
    assert!((0.0..=1.0).contains(&density), "density must be in [0, 1]");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();

    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(density) {
                edges.push((u, v, rng.gen_range(1..=max_weight)));
            }
        }
    }

    from_generated_edges(n, edges, true)
}

/// Generates a directed path 0 -> 1 -> ... -> n-1 with a constant edge weight
pub fn generate_path(n: usize, weight: u32) -> AdjacencyMatrix<u32> {
    assert!(n > 0, "n must be positive");
    assert!(weight > 0, "weight must be positive");

    let edges = (1..n).map(|v| (v - 1, v, weight));
    from_generated_edges(n, edges, false)
}

/// Generates an undirected 2D grid graph with unit weights and 4-connectivity
pub fn generate_grid(width: usize, height: usize) -> AdjacencyMatrix<u32> {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");

    let get_index = |x: usize, y: usize| -> usize { y * width + x };
    let mut edges = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                edges.push((get_index(x, y), get_index(x + 1, y), 1));
            }
            if y + 1 < height {
                edges.push((get_index(x, y), get_index(x, y + 1), 1));
            }
        }
    }

    from_generated_edges(width * height, edges, true)
}

fn from_generated_edges<I>(n: usize, edges: I, undirected: bool) -> AdjacencyMatrix<u32>
where
    I: IntoIterator<Item = (usize, usize, u32)>,
{
    let built = if undirected {
        AdjacencyMatrix::undirected_from_edges(n, edges)
    } else {
        AdjacencyMatrix::from_edges(n, edges)
    };

    match built {
        Ok(matrix) => matrix,
        Err(e) => panic!("generator produced an invalid matrix: {}", e),
    }
}
