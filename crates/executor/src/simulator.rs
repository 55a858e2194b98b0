use async_trait::async_trait;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::config::SimulatorConfig;
use super::error::Error;
use super::types::{GraphLoader, LabeledGraph};

/// Produces a random graph for simulation purposes.
///
/// Every node `N0..N{total_nodes-1}` gets `edges_per_node` outgoing edges to random
/// targets (self-loops and parallel edges included) with weights drawn uniformly from
/// `min_weight..=max_weight`. A configured seed makes the graph reproducible.
pub struct SimulatorLoader {
    config: SimulatorConfig,
}

impl SimulatorLoader {
    pub fn new(config: SimulatorConfig) -> Self {
        SimulatorLoader { config }
    }

    fn validate(&self) -> Result<(), Error> {
        if self.config.total_nodes == 0 {
            return Err(Error::InvalidSimulatorConfig(
                "total_nodes must be at least 1".to_string(),
            ));
        }
        if self.config.min_weight > self.config.max_weight {
            return Err(Error::InvalidSimulatorConfig(format!(
                "min_weight {} exceeds max_weight {}",
                self.config.min_weight, self.config.max_weight
            )));
        }
        Ok(())
    }

    fn generate(&self) -> Result<LabeledGraph, Error> {
        self.validate()?;

        let mut rng: SmallRng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let total_nodes = self.config.total_nodes;
        let weight_range = self.config.min_weight..=self.config.max_weight;
        let labels: Vec<String> = (0..total_nodes).map(|i| format!("N{}", i)).collect();

        let mut graph = LabeledGraph::new();
        for label in &labels {
            graph.node(label);
        }

        for from in &labels {
            for _ in 0..self.config.edges_per_node {
                let to = &labels[rng.random_range(0..total_nodes)];
                let weight = rng.random_range(weight_range.clone());
                graph.connect(from, to, weight)?;
            }
        }

        Ok(graph)
    }
}

#[async_trait]
impl GraphLoader for SimulatorLoader {
    async fn load(self) -> Result<LabeledGraph, Error> {
        let graph = self.generate()?;
        info!(
            "Simulator generated {} nodes and {} edges.",
            graph.graph().len(),
            graph.graph().edge_count()
        );
        Ok(graph)
    }
}
