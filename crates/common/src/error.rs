use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Indicates an attempt to access a node index that exceeds the graph size (N).
    NodeIndexOutOfBounds(usize),

    /// A node handle issued by a different graph instance was passed to this graph.
    ForeignNode { node_graph: u64, graph: u64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NodeIndexOutOfBounds(n) => write!(f, "Node index {} is out of bounds.", n),

            Error::ForeignNode { node_graph, graph } => write!(
                f,
                "Node belongs to graph #{} but was used with graph #{}.",
                node_graph, graph
            ),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_offending_value() {
        assert_eq!(
            Error::NodeIndexOutOfBounds(7).to_string(),
            "Node index 7 is out of bounds."
        );
        assert_eq!(
            Error::ForeignNode {
                node_graph: 2,
                graph: 5
            }
            .to_string(),
            "Node belongs to graph #2 but was used with graph #5."
        );
    }
}
