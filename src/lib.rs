//! Dense SSSP - single-source shortest paths over adjacency matrices
//!
//! This library implements the classic array-scan variant of Dijkstra's algorithm,
//! running in O(V²) over a dense V×V weight matrix. A cell value of zero means
//! "no edge", so the algorithm never needs a priority queue: every round scans
//! the distance table for the closest unfinalized vertex.

pub mod algorithm;
pub mod graph;

pub use algorithm::{
    dijkstra::{ShortestPathSolver, SolverState},
    report::Report,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyMatrix, Weight, WeightMatrix};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

/// Reasons an input was rejected
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("vertex count must be at least 1")]
    EmptyGraph,

    #[error("vertex {vertex} is out of range for {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("graph has {actual} vertices, expected {expected}")]
    VertexCountMismatch { expected: usize, actual: usize },

    #[error("row {row} has {actual} entries, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("negative edge weight from {from} to {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("infinity sentinel must be positive")]
    NonPositiveInfinity,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
