use std::collections::HashMap;
use std::sync::Arc;

use common::types::Weight;
use shortest_path_core::{Graph, NodeRef, QueryOptions, ShortestPaths};

use super::config::QueryConfig;
use super::error::Error;
use super::samples::SampleKind;

/// Where the graph for this run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Sample(SampleKind),
    Csv(String),
    Sim,
}

/// A trait defining the contract for any source that builds the graph queried by
/// the pipeline.
///
/// The trait bounds (`Send`, `Sync`, `'static`) allow a loader to be moved onto the
/// Tokio runtime.
#[async_trait::async_trait]
pub trait GraphLoader: Send + Sync + 'static {
    async fn load(self) -> Result<LabeledGraph, Error>;
}

/// Graph with string labels plus a label lookup used by the driver.
///
/// The shortest-path engine never looks at labels; the lookup exists only so that
/// queries and CSV rows can name nodes.
#[derive(Debug, Default)]
pub struct LabeledGraph {
    graph: Graph<String>,
    by_label: HashMap<String, NodeRef>,
}

impl LabeledGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node labelled `label`, creating it on first sight.
    pub fn node(&mut self, label: &str) -> NodeRef {
        if let Some(&node) = self.by_label.get(label) {
            return node;
        }
        let node = self.graph.add_node(label.to_string());
        self.by_label.insert(label.to_string(), node);
        node
    }

    /// Adds `from -> to`, creating either node if needed.
    pub fn connect(&mut self, from: &str, to: &str, weight: Weight) -> Result<(), Error> {
        let src = self.node(from);
        let dst = self.node(to);
        self.graph.connect(src, dst, weight)?;
        Ok(())
    }

    pub fn find(&self, label: &str) -> Result<NodeRef, Error> {
        self.by_label
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownNode(label.to_string()))
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Label of the node at `index`, or `"?"` for an index outside the graph.
    pub fn label_at(&self, index: usize) -> &str {
        self.graph
            .node_ref(index)
            .and_then(|node| self.graph.label(node).ok())
            .map_or("?", String::as_str)
    }

    /// Query from the first inserted node to the last one.
    pub fn default_query(&self) -> Result<Query, Error> {
        let first = self.graph.node_ref(0).ok_or(Error::EmptyGraph)?;
        let last = self
            .graph
            .node_ref(self.graph.len() - 1)
            .ok_or(Error::EmptyGraph)?;

        Ok(Query {
            from: self.graph.label(first)?.clone(),
            to: self.graph.label(last)?.clone(),
        })
    }

    /// Resolves both labels and runs the shortest-path query.
    pub fn query(&self, query: Query, options: &QueryOptions) -> Result<QueryOutcome, Error> {
        let src = self.find(&query.from)?;
        let dst = self.find(&query.to)?;
        let result = self.graph.shortest_path_with(src, dst, options)?;

        Ok(QueryOutcome {
            query,
            destination: dst,
            result,
        })
    }
}

pub type SharedGraph = Arc<LabeledGraph>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub from: String,
    pub to: String,
}

impl From<QueryConfig> for Query {
    fn from(config: QueryConfig) -> Self {
        Query {
            from: config.from,
            to: config.to,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub query: Query,
    pub destination: NodeRef,
    pub result: ShortestPaths,
}
