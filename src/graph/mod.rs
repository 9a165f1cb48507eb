pub mod generators;
pub mod matrix;
pub mod traits;
pub mod weight;

pub use matrix::AdjacencyMatrix;
pub use traits::WeightMatrix;
pub use weight::Weight;
