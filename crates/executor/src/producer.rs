use tokio::task::JoinHandle;
use tracing::info;

use super::{
    error::Error,
    types::{GraphLoader, LabeledGraph},
};

pub struct Producer<S: GraphLoader> {
    loader: S,
}

impl<S> Producer<S>
where
    S: GraphLoader,
{
    pub fn new(loader: S) -> Self {
        Producer { loader }
    }

    pub fn spawn(self) -> JoinHandle<Result<LabeledGraph, Error>> {
        info!("Producer ready.");
        tokio::spawn(async move { self.loader.load().await })
    }
}
