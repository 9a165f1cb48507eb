use std::env;
use std::time::{Duration, Instant};

use dense_sssp::graph::generators::generate_random;
use dense_sssp::{AdjacencyMatrix, ShortestPathSolver, WeightMatrix};
use log::info;

/// Benchmark settings, read from positional arguments
#[derive(Debug, Clone)]
struct BenchmarkConfig {
    /// Largest vertex count to test; sizes double up to it
    max_vertices: usize,
    /// Probability of an edge between two vertices
    density: f64,
    /// Timed runs per size
    runs: usize,
    /// Seed for the graph generator
    seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            max_vertices: 2_048,
            density: 0.1,
            runs: 5,
            seed: 42,
        }
    }
}

impl BenchmarkConfig {
    fn from_args(args: &[String]) -> Self {
        let defaults = BenchmarkConfig::default();
        BenchmarkConfig {
            max_vertices: args
                .get(1)
                .and_then(|a| a.parse::<usize>().ok())
                .unwrap_or(defaults.max_vertices),
            density: args
                .get(2)
                .and_then(|a| a.parse::<f64>().ok())
                .filter(|d| (0.0..=1.0).contains(d))
                .unwrap_or(defaults.density),
            runs: args
                .get(3)
                .and_then(|a| a.parse::<usize>().ok())
                .filter(|&r| r > 0)
                .unwrap_or(defaults.runs),
            seed: args
                .get(4)
                .and_then(|a| a.parse::<u64>().ok())
                .unwrap_or(defaults.seed),
        }
    }
}

// Average time of `runs` computations from vertex 0, reusing one solver
fn benchmark_solver(
    graph: &AdjacencyMatrix<u32>,
    runs: usize,
) -> Result<(Duration, usize), dense_sssp::Error> {
    let mut solver = ShortestPathSolver::<u32>::new(graph.vertex_count())?;
    let mut total = Duration::ZERO;

    for _ in 0..runs {
        let start = Instant::now();
        solver.calculate_distance(graph, 0)?;
        total += start.elapsed();
    }

    let reachable = (0..graph.vertex_count())
        .filter(|&v| solver.is_reachable(v))
        .count();

    Ok((total / runs as u32, reachable))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = BenchmarkConfig::from_args(&args);
    info!("Benchmark configuration: {:?}", config);

    println!("=====================================================");
    println!("Benchmark: array-scan Dijkstra on dense matrices");
    println!("Density: {}, runs per size: {}", config.density, config.runs);
    println!("=====================================================");

    let mut results = Vec::new();
    let mut size = 64;
    while size <= config.max_vertices {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, config.density, 100, config.seed);
        println!("Graph has {} edges", graph.edge_count());

        let (average, reachable) = benchmark_solver(&graph, config.runs)?;
        println!("  - Found {} reachable vertices in {:?} on average", reachable, average);

        results.push((size, graph.edge_count(), average));
        size *= 2;
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12}", "Vertices", "Edges", "Avg (us)");
    println!("-----------------------------------------------------");

    for (size, edges, average) in &results {
        println!("{:<10} | {:<12} | {:<12}", size, edges, average.as_micros());
    }

    Ok(())
}
