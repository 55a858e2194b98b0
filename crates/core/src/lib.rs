//! Single-source shortest paths over a directed, integer-weighted graph.
//!
//! [`Graph`] stores nodes and edges. [`shortest_path`] picks Dijkstra when every weight
//! is non-negative and Bellman-Ford otherwise, reporting negative cycles through
//! [`ShortestPaths::has_negative_cycle`].

pub mod edges;
pub mod graph;
pub mod path;
pub mod solver;
pub mod traits;

pub use edges::EdgeView;
pub use graph::{Graph, Node, NodeRef};
pub use solver::{Algorithm, QueryOptions, ShortestPaths, shortest_path, shortest_path_with};
