use log::{debug, trace};

use crate::algorithm::report::Report;
use crate::graph::{Weight, WeightMatrix};
use crate::{InvalidArgument, Result};

/// Lifecycle of a solver instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// Freshly constructed or reset: every distance is the infinity sentinel
    Initialized,
    /// A computation from `source` has completed
    Solved { source: usize },
}

/// Classic O(V²) Dijkstra over a dense weight matrix
///
/// Instead of a priority queue, each round scans the whole distance table for the
/// closest unvisited vertex. The solver owns the distance table and the visited set,
/// both sized to the vertex count given at construction.
#[derive(Debug, Clone)]
pub struct ShortestPathSolver<W>
where
    W: Weight,
{
    /// Number of vertices every graph passed in must have
    vertex_count: usize,

    /// Distance recorded for vertices with no known path
    infinity: W,

    /// Best known distance from the source to each vertex
    distances: Vec<W>,

    /// Vertices whose distance is final
    visited: Vec<bool>,

    /// Visited vertices in the order they were finalized
    settled: Vec<usize>,

    state: SolverState,
}

impl<W> ShortestPathSolver<W>
where
    W: Weight,
{
    /// Creates a solver for graphs with `vertex_count` vertices
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(InvalidArgument::EmptyGraph.into());
        }

        Ok(ShortestPathSolver {
            vertex_count,
            infinity: W::INFINITY,
            distances: vec![W::INFINITY; vertex_count],
            visited: vec![false; vertex_count],
            settled: Vec::with_capacity(vertex_count),
            state: SolverState::Initialized,
        })
    }

    /// Sets the sentinel used for unreachable vertices
    ///
    /// Path sums that would reach the sentinel are never recorded, so a smaller
    /// sentinel also acts as a distance cap.
    pub fn with_infinity(mut self, infinity: W) -> Result<Self> {
        if infinity <= W::zero() {
            return Err(InvalidArgument::NonPositiveInfinity.into());
        }
        self.infinity = infinity;
        self.reset();
        Ok(self)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn infinity(&self) -> W {
        self.infinity
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Computes the distance from `source` to every vertex of `graph`
    ///
    /// The graph must be a non-negative `vertex_count × vertex_count` matrix. Any
    /// state left by a previous computation is discarded first, so a solver can be
    /// reused for other sources or graphs of the same size. Unreachable vertices keep
    /// the infinity sentinel.
    pub fn calculate_distance<G>(&mut self, graph: &G, source: usize) -> Result<&[W]>
    where
        G: WeightMatrix<W> + ?Sized,
    {
        if source >= self.vertex_count {
            return Err(InvalidArgument::VertexOutOfRange {
                vertex: source,
                vertex_count: self.vertex_count,
            }
            .into());
        }
        graph.validate(self.vertex_count)?;

        if let SolverState::Solved { source: previous } = self.state {
            debug!("Discarding distances from previous source {}", previous);
            self.reset();
        }

        debug!(
            "Computing distances from source {} over {} vertices",
            source, self.vertex_count
        );
        self.distances[source] = W::zero();

        // The source is picked first; each round finalizes one more vertex.
        for _ in 1..self.vertex_count {
            let Some(u) = self.select_next_vertex() else {
                break;
            };
            self.visited[u] = true;
            self.settled.push(u);

            let dist_u = self.distances[u];
            trace!("Settled vertex {} at distance {}", u, dist_u);
            if dist_u == self.infinity {
                continue;
            }

            for (v, &weight) in graph.row(u).iter().enumerate() {
                if self.visited[v] || !weight.is_edge() {
                    continue;
                }
                if let Some(candidate) = dist_u.checked_add(&weight) {
                    if candidate < self.distances[v] {
                        trace!("Relaxed vertex {} via {}: {}", v, u, candidate);
                        self.distances[v] = candidate;
                    }
                }
            }
        }

        self.state = SolverState::Solved { source };
        debug!(
            "Finished source {}: {} of {} vertices reachable",
            source,
            self.distances.iter().filter(|&&d| d != self.infinity).count(),
            self.vertex_count
        );

        Ok(&self.distances)
    }

    /// Returns the unvisited vertex with the smallest distance
    ///
    /// Ties go to the last such vertex in index order.
    fn select_next_vertex(&self) -> Option<usize> {
        let mut min = self.infinity;
        let mut min_index = None;

        for (v, &dist) in self.distances.iter().enumerate() {
            if !self.visited[v] && dist <= min {
                min = dist;
                min_index = Some(v);
            }
        }

        min_index
    }

    /// Current distance table, indexed by vertex
    pub fn distances(&self) -> &[W] {
        &self.distances
    }

    /// Distance to `vertex`, or `None` if it is unreachable or out of range
    pub fn distance_to(&self, vertex: usize) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|&d| d != self.infinity)
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance_to(vertex).is_some()
    }

    /// Returns true once `vertex` has been finalized by the last computation
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.visited.get(vertex).copied().unwrap_or(false)
    }

    /// Vertices in the order the last computation finalized them
    pub fn settled_order(&self) -> &[usize] {
        &self.settled
    }

    /// Read-only view of the distance table for display or iteration
    pub fn report(&self) -> Report<'_, W> {
        Report::new(&self.distances)
    }

    /// Restores the freshly constructed state
    pub fn reset(&mut self) {
        self.distances.fill(self.infinity);
        self.visited.fill(false);
        self.settled.clear();
        self.state = SolverState::Initialized;
    }

    /// Consumes the solver, returning its distance table
    pub fn into_distances(self) -> Vec<W> {
        self.distances
    }
}
