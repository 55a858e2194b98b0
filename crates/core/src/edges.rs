use common::types::Edge;

use super::graph::Graph;

/// Read-only enumeration of every edge in a [`Graph`] as `(src, dst, weight)`.
///
/// Edges are yielded source by source in index order, and within a source in
/// adjacency (insertion) order. The view borrows the graph, so the graph cannot
/// change while it is alive.
#[derive(Debug, Clone)]
pub struct EdgeView<'a, L> {
    graph: &'a Graph<L>,
    node: usize,
    slot: usize,
}

impl<'a, L> EdgeView<'a, L> {
    pub(crate) fn new(graph: &'a Graph<L>) -> Self {
        Self {
            graph,
            node: 0,
            slot: 0,
        }
    }
}

impl<L> Iterator for EdgeView<'_, L> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        while self.node < self.graph.len() {
            let adjacency = self.graph.node_at(self.node).adjacency();
            if let Some(&(dst, weight)) = adjacency.get(self.slot) {
                self.slot += 1;
                return Some((self.node, dst, weight));
            }
            self.node += 1;
            self.slot = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_edges_in_source_then_adjacency_order() {
        let mut graph = Graph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");

        // Connected out of order on purpose.
        graph.connect(c, a, 7).unwrap();
        graph.connect(a, c, 2).unwrap();
        graph.connect(a, b, -3).unwrap();
        graph.connect(b, b, 1).unwrap();

        let edges: Vec<Edge> = graph.all_edges().collect();
        assert_eq!(edges, vec![(0, 2, 2), (0, 1, -3), (1, 1, 1), (2, 0, 7)]);
    }

    #[test]
    fn skips_nodes_without_outgoing_edges() {
        let mut graph = Graph::new();
        let a = graph.add_node(0);
        let _isolated = graph.add_node(1);
        let c = graph.add_node(2);
        graph.connect(c, a, 1).unwrap();

        assert_eq!(graph.all_edges().collect::<Vec<_>>(), vec![(2, 0, 1)]);
    }

    #[test]
    fn empty_graph_has_no_edges() {
        let graph: Graph<()> = Graph::new();
        assert_eq!(graph.all_edges().count(), 0);
    }
}
