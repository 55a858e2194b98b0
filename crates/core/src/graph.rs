use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use common::error::Error;
use common::types::Weight;

use super::edges::EdgeView;

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to a node inside a specific [`Graph`].
///
/// Handles are only issued by [`Graph::add_node`] and [`Graph::node_ref`]. They remember
/// which graph issued them, so passing a handle to another graph is rejected instead of
/// silently addressing an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    graph_id: u64,
    index: usize,
}

impl NodeRef {
    /// Dense, zero-based insertion index of the node.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// A node with an opaque caller-supplied label and its outgoing adjacency.
///
/// The adjacency is an ordered list of `(neighbor index, weight)` pairs. Parallel
/// edges and self-loops are stored as-is.
#[derive(Debug, Clone)]
pub struct Node<L> {
    index: usize,
    label: L,
    adjacency: Vec<(usize, Weight)>,
}

impl<L> Node<L> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    /// Outgoing edges in insertion order.
    pub fn adjacency(&self) -> &[(usize, Weight)] {
        &self.adjacency
    }
}

impl<L: fmt::Display> fmt::Display for Node<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let weights: Vec<String> = self.adjacency.iter().map(|(_, w)| w.to_string()).collect();
        write!(
            f,
            "Node graph index: {}. Label: {}. #Neighbors: {}. Weights: [{}]",
            self.index,
            self.label,
            self.adjacency.len(),
            weights.join(", ")
        )
    }
}

/// Directed, weighted graph stored as an arena of nodes.
///
/// The graph is the sole owner of its nodes; callers address them through
/// [`NodeRef`] handles. Insertion is append-only, so a node's index is fixed when
/// it is created and always equals its insertion position.
#[derive(Debug)]
pub struct Graph<L> {
    id: u64,
    nodes: Vec<Node<L>>,
}

impl<L> Default for Graph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Graph<L> {
    pub fn new() -> Self {
        Self {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
        }
    }

    /// Appends a node carrying `label` and returns its handle.
    ///
    /// The new node's index is the number of nodes present before the call.
    /// Existing indices are never touched.
    pub fn add_node(&mut self, label: L) -> NodeRef {
        let index = self.nodes.len();
        self.nodes.push(Node {
            index,
            label,
            adjacency: Vec::new(),
        });

        NodeRef {
            graph_id: self.id,
            index,
        }
    }

    /// Adds the directed edge `src -> dst` with the given weight.
    ///
    /// # Errors
    /// Returns `Error::ForeignNode` if either handle was issued by another graph, or
    /// `Error::NodeIndexOutOfBounds` if a handle does not address a node of this graph.
    pub fn connect(&mut self, src: NodeRef, dst: NodeRef, weight: Weight) -> Result<(), Error> {
        let src = self.resolve(src)?;
        let dst = self.resolve(dst)?;
        self.nodes[src].adjacency.push((dst, weight));
        Ok(())
    }

    /// Validates that `node` belongs to this graph and returns its index.
    pub fn resolve(&self, node: NodeRef) -> Result<usize, Error> {
        if node.graph_id != self.id {
            return Err(Error::ForeignNode {
                node_graph: node.graph_id,
                graph: self.id,
            });
        }
        if node.index >= self.nodes.len() {
            return Err(Error::NodeIndexOutOfBounds(node.index));
        }
        Ok(node.index)
    }

    /// Returns the handle for the node at `index`, if any.
    pub fn node_ref(&self, index: usize) -> Option<NodeRef> {
        (index < self.nodes.len()).then_some(NodeRef {
            graph_id: self.id,
            index,
        })
    }

    pub fn node(&self, node: NodeRef) -> Result<&Node<L>, Error> {
        let index = self.resolve(node)?;
        Ok(&self.nodes[index])
    }

    pub fn label(&self, node: NodeRef) -> Result<&L, Error> {
        self.node(node).map(Node::label)
    }

    /// Nodes in index order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<L>> {
        self.nodes.iter()
    }

    pub(crate) fn node_at(&self, index: usize) -> &Node<L> {
        &self.nodes[index]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.adjacency.len()).sum()
    }

    /// Read-only view over every edge, in source-then-adjacency order.
    pub fn all_edges(&self) -> EdgeView<'_, L> {
        EdgeView::new(self)
    }

    /// True if any edge carries a negative weight.
    pub fn has_negative_weight(&self) -> bool {
        self.all_edges().any(|(_, _, w)| w < 0)
    }
}

impl<L> fmt::Display for Graph<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Directed and weighted graph with {} nodes.",
            self.nodes.len()
        )
    }
}
