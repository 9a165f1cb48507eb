use dense_sssp::graph::generators::{
    generate_grid, generate_path, generate_random, generate_random_undirected,
};
use dense_sssp::{AdjacencyMatrix, ShortestPathSolver, WeightMatrix};
use rayon::prelude::*;

// Bellman-Ford over the matrix, used as an independent reference
fn reference_distances(graph: &AdjacencyMatrix<u32>, source: usize) -> Vec<Option<u64>> {
    let n = graph.vertex_count();
    let mut distances = vec![None; n];
    distances[source] = Some(0u64);

    for _ in 1..n {
        let mut changed = false;
        for u in 0..n {
            let Some(dist_u) = distances[u] else {
                continue;
            };
            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u + weight as u64;
                if distances[v].map_or(true, |d| candidate < d) {
                    distances[v] = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    distances
}

fn solve(graph: &AdjacencyMatrix<u32>, source: usize) -> Vec<u32> {
    let mut solver = ShortestPathSolver::new(graph.vertex_count()).unwrap();
    solver.calculate_distance(graph, source).unwrap().to_vec()
}

#[test]
fn test_matches_reference_on_random_graphs() {
    for seed in 0..20 {
        let graph = generate_random(30, 0.15, 20, seed);
        let mut solver = ShortestPathSolver::new(30).unwrap();

        for source in [0, 7, 29] {
            solver.calculate_distance(&graph, source).unwrap();
            let expected = reference_distances(&graph, source);

            for v in 0..30 {
                assert_eq!(
                    solver.distance_to(v).map(u64::from),
                    expected[v],
                    "seed {} source {} vertex {}",
                    seed,
                    source,
                    v
                );
            }
        }
    }
}

#[test]
fn test_source_is_zero_and_finite_distances_are_bounded() {
    for seed in 0..10 {
        let graph = generate_random(40, 0.05, 50, seed);
        let distances = solve(&graph, 3);
        let total_weight: u64 = (0..graph.vertex_count())
            .flat_map(|u| graph.outgoing_edges(u))
            .map(|(_, w)| w as u64)
            .sum();

        assert_eq!(distances[3], 0);
        // Every finite distance is a simple path, so it cannot exceed the sum of all weights
        assert!(distances
            .iter()
            .filter(|&&d| d != u32::MAX)
            .all(|&d| d as u64 <= total_weight));
    }
}

#[test]
fn test_no_edge_can_be_relaxed_further() {
    for seed in 0..10 {
        let graph = generate_random(35, 0.2, 100, seed);
        let distances = solve(&graph, 0);

        for u in 0..graph.vertex_count() {
            if distances[u] == u32::MAX {
                continue;
            }
            for (v, weight) in graph.outgoing_edges(u) {
                assert!(
                    distances[v] <= distances[u] + weight,
                    "edge {} -> {} could still be relaxed",
                    u,
                    v
                );
            }
        }
    }
}

#[test]
fn test_undirected_distances_are_symmetric() {
    let graph = generate_random_undirected(25, 0.2, 50, 11);
    let all: Vec<Vec<u32>> = (0..25).map(|s| solve(&graph, s)).collect();

    for a in 0..25 {
        for b in 0..25 {
            assert_eq!(all[a][b], all[b][a], "distance {} <-> {}", a, b);
        }
    }
}

#[test]
fn test_grid_distances_are_manhattan() {
    let (width, height) = (5, 4);
    let graph = generate_grid(width, height);
    let distances = solve(&graph, 0);

    for y in 0..height {
        for x in 0..width {
            assert_eq!(distances[y * width + x], (x + y) as u32);
        }
    }
}

#[test]
fn test_path_is_only_reachable_forwards() {
    let graph = generate_path(6, 3);

    assert_eq!(solve(&graph, 0), vec![0, 3, 6, 9, 12, 15]);

    let from_end = solve(&graph, 5);
    assert_eq!(from_end[5], 0);
    assert!(from_end[..5].iter().all(|&d| d == u32::MAX));
}

#[test]
fn test_independent_solvers_run_in_parallel() {
    let graph = generate_random(60, 0.1, 30, 5);

    let parallel: Vec<Vec<u32>> = (0..60)
        .into_par_iter()
        .map(|source| solve(&graph, source))
        .collect();

    let mut solver = ShortestPathSolver::new(60).unwrap();
    for (source, distances) in parallel.iter().enumerate() {
        let sequential = solver.calculate_distance(&graph, source).unwrap();
        assert_eq!(sequential, distances.as_slice());
    }
}
