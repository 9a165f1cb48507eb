use crate::graph::traits::WeightMatrix;
use crate::graph::Weight;
use crate::{Error, InvalidArgument, Result};
use serde::{Deserialize, Serialize};

/// A validated, immutable adjacency matrix stored in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<W>>", into = "Vec<Vec<W>>")]
pub struct AdjacencyMatrix<W>
where
    W: Weight,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Weights, `vertex_count * vertex_count` cells
    weights: Vec<W>,
}

impl<W> AdjacencyMatrix<W>
where
    W: Weight,
{
    /// Creates a matrix from its rows
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(InvalidArgument::EmptyGraph.into());
        }
        rows.validate(rows.len())?;

        let vertex_count = rows.len();
        let weights = rows.into_iter().flatten().collect();

        Ok(AdjacencyMatrix {
            vertex_count,
            weights,
        })
    }

    /// Creates a matrix from a list of directed edges `(from, to, weight)`
    ///
    /// A later edge between the same pair of vertices replaces an earlier one.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        Self::build(vertex_count, edges, false)
    }

    /// Creates a matrix where every edge is written in both directions
    pub fn undirected_from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        Self::build(vertex_count, edges, true)
    }

    fn build<I>(vertex_count: usize, edges: I, undirected: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        if vertex_count == 0 {
            return Err(InvalidArgument::EmptyGraph.into());
        }

        let mut weights = vec![W::zero(); vertex_count * vertex_count];
        for (from, to, weight) in edges {
            for vertex in [from, to] {
                if vertex >= vertex_count {
                    return Err(InvalidArgument::VertexOutOfRange {
                        vertex,
                        vertex_count,
                    }
                    .into());
                }
            }
            if weight.is_negative() {
                return Err(InvalidArgument::NegativeWeight { from, to }.into());
            }

            weights[from * vertex_count + to] = weight;
            if undirected {
                weights[to * vertex_count + from] = weight;
            }
        }

        Ok(AdjacencyMatrix {
            vertex_count,
            weights,
        })
    }

    /// Returns true if every edge has a reverse edge of the same weight
    pub fn is_symmetric(&self) -> bool {
        let n = self.vertex_count;
        (0..n).all(|i| (i + 1..n).all(|j| self.weights[i * n + j] == self.weights[j * n + i]))
    }

    /// Returns an iterator over the rows of the matrix
    pub fn rows(&self) -> impl Iterator<Item = &[W]> + '_ {
        self.weights.chunks_exact(self.vertex_count)
    }
}

impl<W> WeightMatrix<W> for AdjacencyMatrix<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn row(&self, vertex: usize) -> &[W] {
        let start = vertex * self.vertex_count;
        &self.weights[start..start + self.vertex_count]
    }
}

impl<W> TryFrom<Vec<Vec<W>>> for AdjacencyMatrix<W>
where
    W: Weight,
{
    type Error = Error;

    fn try_from(rows: Vec<Vec<W>>) -> Result<Self> {
        AdjacencyMatrix::from_rows(rows)
    }
}

impl<W> From<AdjacencyMatrix<W>> for Vec<Vec<W>>
where
    W: Weight,
{
    fn from(matrix: AdjacencyMatrix<W>) -> Self {
        matrix.rows().map(|row| row.to_vec()).collect()
    }
}
