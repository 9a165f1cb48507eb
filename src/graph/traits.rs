use crate::graph::Weight;
use crate::{InvalidArgument, Result};

/// Trait representing a dense, read-only weight matrix
///
/// Cell `(from, to)` holds the weight of the directed edge `from -> to`, with zero
/// meaning that the edge is absent.
pub trait WeightMatrix<W: Weight> {
    /// Returns the number of vertices (rows) in the matrix
    fn vertex_count(&self) -> usize;

    /// Returns the outgoing weights of a vertex, indexed by target vertex
    fn row(&self, vertex: usize) -> &[W];

    /// Gets the weight stored for an edge, zero if absent
    fn weight(&self, from: usize, to: usize) -> W {
        self.row(from)[to]
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.weight(from, to).is_edge()
    }

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(
            self.row(vertex)
                .iter()
                .copied()
                .enumerate()
                .filter(|(_, weight)| weight.is_edge()),
        )
    }

    /// Returns the number of edges in the matrix
    fn edge_count(&self) -> usize {
        (0..self.vertex_count())
            .map(|v| self.row(v).iter().filter(|w| w.is_edge()).count())
            .sum()
    }

    /// Checks that the matrix is square with `expected` vertices and holds no negative weight
    fn validate(&self, expected: usize) -> Result<()> {
        let actual = self.vertex_count();
        if actual != expected {
            return Err(InvalidArgument::VertexCountMismatch { expected, actual }.into());
        }

        for from in 0..actual {
            let row = self.row(from);
            if row.len() != expected {
                return Err(InvalidArgument::RowLengthMismatch {
                    row: from,
                    expected,
                    actual: row.len(),
                }
                .into());
            }
            if let Some(to) = row.iter().position(|w| w.is_negative()) {
                return Err(InvalidArgument::NegativeWeight { from, to }.into());
            }
        }

        Ok(())
    }
}

impl<W: Weight> WeightMatrix<W> for [Vec<W>] {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn row(&self, vertex: usize) -> &[W] {
        &self[vertex]
    }
}

impl<W: Weight> WeightMatrix<W> for Vec<Vec<W>> {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn row(&self, vertex: usize) -> &[W] {
        &self[vertex]
    }
}

impl<W: Weight, const N: usize> WeightMatrix<W> for [[W; N]; N] {
    fn vertex_count(&self) -> usize {
        N
    }

    fn row(&self, vertex: usize) -> &[W] {
        &self[vertex]
    }
}
