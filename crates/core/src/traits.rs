use common::types::UNREACHABLE;

use super::graph::Graph;

/// Raw per-node output of a single-source shortest-path run.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutput {
    /// Distance from the source, `f64::INFINITY` when unreached.
    pub distances: Vec<f64>,
    /// Node preceding each node on its best-known path; `None` for the source and unreached nodes.
    pub predecessors: Vec<Option<usize>>,
    /// Set when a negative cycle reachable from the source was found. Distances and
    /// predecessors are unreliable in that case.
    pub has_negative_cycle: bool,
}

impl SolverOutput {
    /// Fresh output for `num_nodes` nodes with only `source` at distance zero.
    pub fn init(num_nodes: usize, source: usize) -> Self {
        let mut distances = vec![UNREACHABLE; num_nodes];
        distances[source] = 0.0;

        Self {
            distances,
            predecessors: vec![None; num_nodes],
            has_negative_cycle: false,
        }
    }
}

/// Trait for single-source shortest-path algorithms.
pub trait ShortestPathSolver {
    /// Computes distances and predecessors from the node at index `source`.
    ///
    /// `source` must be a valid index of `graph`; the engine validates handles before
    /// calling into a solver.
    fn solve<L>(&self, graph: &Graph<L>, source: usize) -> SolverOutput;
}
