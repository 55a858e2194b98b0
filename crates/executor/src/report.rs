use std::fmt::Write;

use super::types::{LabeledGraph, QueryOutcome};

/// Renders query outcomes as plain text.
pub struct Reporter {
    show_tables: bool,
}

impl Reporter {
    pub fn new(show_tables: bool) -> Self {
        Reporter { show_tables }
    }

    pub fn render(&self, graph: &LabeledGraph, outcome: &QueryOutcome) -> String {
        let mut out = String::new();
        let result = &outcome.result;
        let query = &outcome.query;

        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "Shortest path from ({}) to ({}) [{:?}]:",
            query.from, query.to, result.algorithm
        );

        if result.has_negative_cycle {
            let _ = writeln!(
                out,
                "WARNING: negative cycle detected; the path and distances below are not reliable."
            );
        }

        let path: Vec<&str> = result
            .path
            .iter()
            .map(|node| graph.label_at(node.index()))
            .collect();

        match result.distance(outcome.destination) {
            Some(distance) if distance.is_finite() => {
                let _ = writeln!(out, "  {}", path.join(" -> "));
                let _ = writeln!(out, "  Distance: {}", distance);
            }
            _ => {
                let _ = writeln!(out, "  ({}) is unreachable from ({}).", query.to, query.from);
            }
        }

        if self.show_tables {
            let _ = writeln!(out, "  {:<12} {:>10} {:>12}", "Node", "Distance", "Predecessor");
            for (index, (distance, predecessor)) in result
                .distances
                .iter()
                .zip(&result.predecessors)
                .enumerate()
            {
                let distance = if distance.is_finite() {
                    distance.to_string()
                } else {
                    "inf".to_string()
                };
                let predecessor = predecessor.map_or("-", |p| graph.label_at(p));
                let _ = writeln!(
                    out,
                    "  {:<12} {:>10} {:>12}",
                    graph.label_at(index),
                    distance,
                    predecessor
                );
            }
        }

        out
    }
}
