use shortest_path_core::QueryOptions;
use tracing::{debug, info};

use super::error::Error;
use super::types::{Query, QueryOutcome, SharedGraph};

/// Runs shortest-path queries against a shared, read-only graph.
///
/// Each query executes on Tokio's blocking pool. The graph is only ever shared
/// through `Arc`, so queries run in parallel without locking.
pub struct QueryRunner {
    graph: SharedGraph,
    options: QueryOptions,
}

impl QueryRunner {
    pub fn new(graph: SharedGraph, options: QueryOptions) -> Self {
        QueryRunner { graph, options }
    }

    pub fn graph(&self) -> &SharedGraph {
        &self.graph
    }

    /// Runs every query concurrently and returns the outcomes in query order.
    pub async fn run(&self, queries: Vec<Query>) -> Vec<Result<QueryOutcome, Error>> {
        info!("Runner: starting {} queries.", queries.len());

        let handles: Vec<_> = queries
            .into_iter()
            .map(|query| {
                let graph = self.graph.clone();
                let options = self.options;
                tokio::task::spawn_blocking(move || {
                    debug!("Runner: querying {} -> {}", query.from, query.to);
                    graph.query(query, &options)
                })
            })
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            let outcome = match handle.await {
                Ok(result) => result,
                Err(e) => Err(Error::TaskFailed(e)),
            };
            outcomes.push(outcome);
        }
        outcomes
    }
}
