use thiserror::Error;

use common::error::Error as GraphError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Graph processing error: {0}")]
    GraphError(#[from] GraphError),

    #[error("No node labelled '{0}' in the graph.")]
    UnknownNode(String),

    #[error("Graph has no nodes to query.")]
    EmptyGraph,

    #[error("Invalid simulator settings: {0}")]
    InvalidSimulatorConfig(String),

    #[error("Background task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
