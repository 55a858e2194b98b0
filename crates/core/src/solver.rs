use common::error::Error;
use common::types::Edge;
use tracing::{debug, warn};

use super::graph::{Graph, NodeRef};
use super::path::{MAX_PATH_STEPS, build_path};
use super::traits::{ShortestPathSolver, SolverOutput};

/// Which algorithm produced a [`ShortestPaths`] result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
}

/// Tunables for a shortest-path query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Maximum predecessor hops followed while rebuilding the path.
    pub path_step_cap: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            path_step_cap: MAX_PATH_STEPS,
        }
    }
}

/// Result of a single shortest-path query.
///
/// When `has_negative_cycle` is set, `distances`, `predecessors` and `path` are
/// illustrative only and must not be trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    /// Nodes from source to destination, inclusive.
    pub path: Vec<NodeRef>,
    /// Distance from the source per node index, `f64::INFINITY` when unreached.
    pub distances: Vec<f64>,
    /// Predecessor per node index; `None` for the source and unreached nodes.
    pub predecessors: Vec<Option<usize>>,
    pub has_negative_cycle: bool,
    pub algorithm: Algorithm,
}

impl ShortestPaths {
    /// Distance to `node`, or `None` if the handle is outside the result.
    pub fn distance(&self, node: NodeRef) -> Option<f64> {
        self.distances.get(node.index()).copied()
    }

    pub fn is_reachable(&self, node: NodeRef) -> bool {
        self.distance(node).is_some_and(f64::is_finite)
    }

    /// True when no negative cycle was detected.
    pub fn is_reliable(&self) -> bool {
        !self.has_negative_cycle
    }
}

/// Dijkstra's algorithm with a linear minimum scan. Valid only for non-negative weights.
pub struct DijkstraSolver;

impl DijkstraSolver {
    /// Index of the unvisited node with the smallest distance.
    ///
    /// Ties go to the lowest index. When every unvisited node is unreached the first
    /// unvisited node is returned; relaxing from it changes nothing.
    fn pick_next(distances: &[f64], visited: &[bool]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &dist) in distances.iter().enumerate() {
            if visited[i] {
                continue;
            }
            match best {
                Some(b) if distances[b] <= dist => {}
                _ => best = Some(i),
            }
        }
        best
    }
}

impl ShortestPathSolver for DijkstraSolver {
    fn solve<L>(&self, graph: &Graph<L>, source: usize) -> SolverOutput {
        let num_nodes = graph.len();
        let mut out = SolverOutput::init(num_nodes, source);
        let mut visited = vec![false; num_nodes];

        for _ in 0..num_nodes {
            let Some(u) = Self::pick_next(&out.distances, &visited) else {
                break;
            };
            visited[u] = true;

            for &(v, weight) in graph.node_at(u).adjacency() {
                if visited[v] {
                    continue;
                }
                let candidate = out.distances[u] + f64::from(weight);
                if candidate < out.distances[v] {
                    out.distances[v] = candidate;
                    out.predecessors[v] = Some(u);
                }
            }
        }

        out.predecessors[source] = None;
        out
    }
}

/// Bellman-Ford with negative cycle detection. Tolerates negative weights.
pub struct BellmanFordSolver;

impl BellmanFordSolver {
    /// Relaxes every edge once. Returns true if any distance improved.
    fn relax_all(edges: &[Edge], out: &mut SolverOutput) -> bool {
        let mut updated = false;
        for &(u, v, weight) in edges {
            let candidate = out.distances[u] + f64::from(weight);
            if candidate < out.distances[v] {
                out.distances[v] = candidate;
                out.predecessors[v] = Some(u);
                updated = true;
            }
        }
        updated
    }

    /// Returns the first edge that could still be relaxed, if any.
    ///
    /// Does not modify `distances`, so repeating the scan cannot change its answer.
    fn find_relaxable(edges: &[Edge], distances: &[f64]) -> Option<Edge> {
        edges
            .iter()
            .copied()
            .find(|&(u, v, weight)| distances[u] + f64::from(weight) < distances[v])
    }
}

impl ShortestPathSolver for BellmanFordSolver {
    fn solve<L>(&self, graph: &Graph<L>, source: usize) -> SolverOutput {
        let num_nodes = graph.len();
        let mut out = SolverOutput::init(num_nodes, source);
        let edges: Vec<Edge> = graph.all_edges().collect();

        // Relaxation phase: N-1 passes, stopping once a pass is quiet.
        for _ in 1..num_nodes {
            if !Self::relax_all(&edges, &mut out) {
                break;
            }
        }

        // Detection phase. Runs even for a single node so a negative self-loop is seen.
        if let Some((u, v, weight)) = Self::find_relaxable(&edges, &out.distances) {
            warn!(u, v, weight, "negative cycle reachable from node {}", source);
            out.has_negative_cycle = true;
        }

        out.predecessors[source] = None;
        out
    }
}

/// Computes the shortest path from `src` to `dst` with default options.
///
/// See [`shortest_path_with`].
pub fn shortest_path<L>(graph: &Graph<L>, src: NodeRef, dst: NodeRef) -> Result<ShortestPaths, Error> {
    shortest_path_with(graph, src, dst, &QueryOptions::default())
}

/// Computes single-source shortest paths from `src` and the path to `dst`.
///
/// Bellman-Ford runs if any edge weight is negative, Dijkstra otherwise. The weight
/// scan is repeated on every call.
///
/// # Errors
/// Returns `Error::ForeignNode` or `Error::NodeIndexOutOfBounds` if either handle does
/// not belong to `graph`. A negative cycle is not an error; it is reported through
/// `has_negative_cycle`.
pub fn shortest_path_with<L>(
    graph: &Graph<L>,
    src: NodeRef,
    dst: NodeRef,
    options: &QueryOptions,
) -> Result<ShortestPaths, Error> {
    let source = graph.resolve(src)?;
    let target = graph.resolve(dst)?;

    let (algorithm, output) = if graph.has_negative_weight() {
        debug!(source, "negative edge weight present, running Bellman-Ford");
        (Algorithm::BellmanFord, BellmanFordSolver.solve(graph, source))
    } else {
        debug!(source, "all edge weights non-negative, running Dijkstra");
        (Algorithm::Dijkstra, DijkstraSolver.solve(graph, source))
    };

    let path = build_path(target, &output.predecessors, options.path_step_cap)
        .into_iter()
        .filter_map(|index| graph.node_ref(index))
        .collect();

    Ok(ShortestPaths {
        path,
        distances: output.distances,
        predecessors: output.predecessors,
        has_negative_cycle: output.has_negative_cycle,
        algorithm,
    })
}

impl<L> Graph<L> {
    /// Method form of [`shortest_path`].
    pub fn shortest_path(&self, src: NodeRef, dst: NodeRef) -> Result<ShortestPaths, Error> {
        shortest_path(self, src, dst)
    }

    /// Method form of [`shortest_path_with`].
    pub fn shortest_path_with(
        &self,
        src: NodeRef,
        dst: NodeRef,
        options: &QueryOptions,
    ) -> Result<ShortestPaths, Error> {
        shortest_path_with(self, src, dst, options)
    }
}

#[cfg(test)]
mod solver_tests {
    use super::*;

    fn build_graph(num_nodes: usize, edges: &[Edge]) -> Graph<usize> {
        let mut graph = Graph::new();
        let refs: Vec<NodeRef> = (0..num_nodes).map(|i| graph.add_node(i)).collect();
        for &(u, v, w) in edges {
            graph.connect(refs[u], refs[v], w).unwrap();
        }
        graph
    }

    #[test]
    fn pick_next_prefers_lowest_index_on_ties() {
        let distances = [f64::INFINITY, 3.0, 3.0, 1.0];
        let visited = [false, false, false, true];
        assert_eq!(DijkstraSolver::pick_next(&distances, &visited), Some(1));
    }

    #[test]
    fn pick_next_falls_back_to_first_unvisited_unreached_node() {
        let distances = [0.0, f64::INFINITY, f64::INFINITY];
        let visited = [true, false, false];
        assert_eq!(DijkstraSolver::pick_next(&distances, &visited), Some(1));
        assert_eq!(DijkstraSolver::pick_next(&distances, &[true; 3]), None);
    }

    #[test]
    fn dijkstra_simple_chain() {
        let graph = build_graph(3, &[(0, 1, 4), (1, 2, 1), (0, 2, 9)]);
        let out = DijkstraSolver.solve(&graph, 0);

        assert_eq!(out.distances, vec![0.0, 4.0, 5.0]);
        assert_eq!(out.predecessors, vec![None, Some(0), Some(1)]);
        assert!(!out.has_negative_cycle);
    }

    #[test]
    fn dijkstra_uses_each_parallel_edge_weight() {
        let graph = build_graph(2, &[(0, 1, 7), (0, 1, 2)]);
        let out = DijkstraSolver.solve(&graph, 0);

        assert_eq!(out.distances[1], 2.0);
    }

    #[test]
    fn dijkstra_source_predecessor_is_cleared_with_cycle_back_to_source() {
        let graph = build_graph(2, &[(0, 1, 0), (1, 0, 0)]);
        let out = DijkstraSolver.solve(&graph, 0);

        assert_eq!(out.predecessors[0], None);
        assert_eq!(out.predecessors[1], Some(0));
    }

    #[test]
    fn dijkstra_from_non_zero_source() {
        let graph = build_graph(3, &[(2, 0, 3), (0, 1, 1)]);
        let out = DijkstraSolver.solve(&graph, 2);

        assert_eq!(out.distances, vec![3.0, 4.0, 0.0]);
        assert_eq!(out.predecessors, vec![Some(2), Some(0), None]);
    }

    #[test]
    fn bellman_ford_handles_negative_edges_without_cycle() {
        let graph = build_graph(4, &[(0, 1, 4), (0, 2, 5), (2, 1, -3), (1, 3, 2)]);
        let out = BellmanFordSolver.solve(&graph, 0);

        assert_eq!(out.distances, vec![0.0, 2.0, 5.0, 4.0]);
        assert_eq!(out.predecessors, vec![None, Some(2), Some(0), Some(1)]);
        assert!(!out.has_negative_cycle);
    }

    #[test]
    fn bellman_ford_detects_negative_cycle() {
        let graph = build_graph(3, &[(0, 1, 1), (1, 2, -2), (2, 1, 1)]);
        let out = BellmanFordSolver.solve(&graph, 0);

        assert!(out.has_negative_cycle);
        assert_eq!(out.predecessors[0], None);
    }

    #[test]
    fn bellman_ford_ignores_unreachable_negative_cycle() {
        let graph = build_graph(4, &[(0, 1, 1), (2, 3, -5), (3, 2, 1)]);
        let out = BellmanFordSolver.solve(&graph, 0);

        assert!(!out.has_negative_cycle);
        assert_eq!(out.distances[2], f64::INFINITY);
        assert_eq!(out.distances[3], f64::INFINITY);
    }

    #[test]
    fn bellman_ford_flags_negative_self_loop_on_single_node() {
        let graph = build_graph(1, &[(0, 0, -1)]);
        let out = BellmanFordSolver.solve(&graph, 0);

        assert!(out.has_negative_cycle);
    }

    #[test]
    fn dispatch_picks_algorithm_by_weight_sign() {
        let positive = build_graph(2, &[(0, 1, 3)]);
        let mixed = build_graph(2, &[(0, 1, 3), (1, 0, -1)]);

        let src = positive.node_ref(0).unwrap();
        let dst = positive.node_ref(1).unwrap();
        assert_eq!(
            positive.shortest_path(src, dst).unwrap().algorithm,
            Algorithm::Dijkstra
        );

        let src = mixed.node_ref(0).unwrap();
        let dst = mixed.node_ref(1).unwrap();
        let result = mixed.shortest_path(src, dst).unwrap();
        assert_eq!(result.algorithm, Algorithm::BellmanFord);
        assert!(result.is_reliable());
        assert_eq!(result.distance(dst), Some(3.0));
    }

    #[test]
    fn shortest_path_rejects_foreign_nodes() {
        let graph = build_graph(2, &[(0, 1, 1)]);
        let other = build_graph(2, &[]);

        let src = graph.node_ref(0).unwrap();
        let foreign = other.node_ref(1).unwrap();

        assert!(matches!(
            graph.shortest_path(src, foreign),
            Err(Error::ForeignNode { .. })
        ));
        assert!(matches!(
            graph.shortest_path(foreign, src),
            Err(Error::ForeignNode { .. })
        ));
    }

    #[test]
    fn path_step_cap_limits_reconstruction_under_negative_cycle() {
        let graph = build_graph(3, &[(0, 1, 1), (1, 2, -3), (2, 1, 1)]);
        let src = graph.node_ref(0).unwrap();
        let dst = graph.node_ref(2).unwrap();

        let options = QueryOptions { path_step_cap: 5 };
        let result = graph.shortest_path_with(src, dst, &options).unwrap();

        assert!(result.has_negative_cycle);
        assert!(result.path.len() <= options.path_step_cap + 1);
        assert_eq!(result.path.last(), Some(&dst));
    }
}
