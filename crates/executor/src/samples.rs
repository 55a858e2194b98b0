use std::str::FromStr;

use async_trait::async_trait;

use super::error::Error;
use super::types::{GraphLoader, LabeledGraph};

/// Built-in demonstration graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// Five nodes, positive weights. Exercises Dijkstra.
    Dijkstra,
    /// Six nodes with the cycle C -> D -> F -> C summing to -4.
    NegativeCycle,
}

impl FromStr for SampleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(SampleKind::Dijkstra),
            "negative-cycle" | "negative_cycle" => Ok(SampleKind::NegativeCycle),
            other => Err(format!("unknown sample graph '{}'", other)),
        }
    }
}

const DIJKSTRA_LABELS: &[&str] = &["A", "B", "C", "D", "E"];

const DIJKSTRA_EDGES: &[(&str, &str, i32)] = &[
    ("A", "B", 10),
    ("A", "D", 5),
    ("B", "A", 1),
    ("B", "C", 1),
    ("B", "D", 2),
    ("C", "B", 1),
    ("C", "E", 4),
    ("D", "B", 3),
    ("D", "C", 9),
    ("D", "E", 2),
    ("E", "A", 15),
    ("E", "C", 6),
];

const NEGATIVE_CYCLE_LABELS: &[&str] = &["A", "B", "C", "D", "E", "F"];

const NEGATIVE_CYCLE_EDGES: &[(&str, &str, i32)] = &[
    ("A", "B", 2),
    ("B", "C", 2),
    ("C", "D", 2),
    ("D", "E", 2),
    ("D", "F", -3),
    ("F", "C", -3),
];

pub struct SampleLoader {
    kind: SampleKind,
}

impl SampleLoader {
    pub fn new(kind: SampleKind) -> Self {
        SampleLoader { kind }
    }

    fn build(&self) -> Result<LabeledGraph, Error> {
        let (labels, edges) = match self.kind {
            SampleKind::Dijkstra => (DIJKSTRA_LABELS, DIJKSTRA_EDGES),
            SampleKind::NegativeCycle => (NEGATIVE_CYCLE_LABELS, NEGATIVE_CYCLE_EDGES),
        };

        let mut graph = LabeledGraph::new();
        // Create nodes up front so indices follow alphabetical order.
        for label in labels {
            graph.node(label);
        }
        for &(from, to, weight) in edges {
            graph.connect(from, to, weight)?;
        }
        Ok(graph)
    }
}

#[async_trait]
impl GraphLoader for SampleLoader {
    async fn load(self) -> Result<LabeledGraph, Error> {
        self.build()
    }
}
