pub mod dijkstra;
pub mod report;

pub use dijkstra::{ShortestPathSolver, SolverState};
pub use report::{Entries, Report};
