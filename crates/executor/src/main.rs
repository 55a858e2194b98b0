pub mod config;
pub mod csv_loader;
pub mod error;
pub mod producer;
pub mod report;
pub mod runner;
pub mod samples;
pub mod simulator;
pub mod types;

use std::env;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use csv_loader::CsvLoader;
use error::Error;
use producer::Producer;
use report::Reporter;
use runner::QueryRunner;
use samples::{SampleKind, SampleLoader};
use shortest_path_core::QueryOptions;
use simulator::SimulatorLoader;
use types::{DataSource, LabeledGraph, Query};

#[tokio::main]
async fn main() {
    init_tracing();

    let source = parse_args();
    if let Err(e) = run(source).await {
        error!("Executor failed: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(source: DataSource) -> Result<(), Error> {
    let config = config::load_config()?;

    let graph = spawn_producer(&source, &config).await??;
    info!("{}", graph.graph());

    let queries: Vec<Query> = if config.queries.is_empty() {
        vec![graph.default_query()?]
    } else {
        config.queries.into_iter().map(Query::from).collect()
    };

    let options = QueryOptions {
        path_step_cap: config.searcher.path_step_cap,
    };
    let runner = QueryRunner::new(Arc::new(graph), options);
    let reporter = Reporter::new(config.report.show_tables);

    for outcome in runner.run(queries).await {
        match outcome {
            Ok(outcome) => println!("{}", reporter.render(runner.graph(), &outcome)),
            Err(e) => error!("Query failed: {}", e),
        }
    }

    info!("Pipeline shut down.");
    Ok(())
}

/// Parse command-line arguments to determine data source
fn parse_args() -> DataSource {
    let args: Vec<String> = env::args().collect();
    let source = args
        .get(1)
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "sample".to_string());

    match source.as_str() {
        "sample" => {
            let kind = args.get(2).map_or(Ok(SampleKind::Dijkstra), |s| s.parse());
            match kind {
                Ok(kind) => DataSource::Sample(kind),
                Err(e) => usage(&args[0], &e),
            }
        }
        "csv" => match args.get(2) {
            Some(path) => DataSource::Csv(path.clone()),
            None => usage(&args[0], "CSV path required for CSV mode"),
        },
        "sim" => DataSource::Sim,
        other => usage(&args[0], &format!("unknown data source '{}'", other)),
    }
}

fn usage(program: &str, reason: &str) -> ! {
    eprintln!(
        "{}\nUsage: {} <SAMPLE|CSV|SIM> [sample name | path_to_csv]\n  - SAMPLE: built-in graph, 'dijkstra' (default) or 'negative-cycle'\n  - CSV: read from,to,weight rows from a CSV file\n  - SIM: generate a random graph from the [simulator] settings",
        reason, program
    );
    std::process::exit(1);
}

pub fn spawn_producer(
    source: &DataSource,
    config: &config::Config,
) -> JoinHandle<Result<LabeledGraph, Error>> {
    match source {
        DataSource::Sample(kind) => {
            info!("Starting SampleLoader producer task ({:?})...", kind);
            Producer::new(SampleLoader::new(*kind)).spawn()
        }
        DataSource::Csv(path) => {
            info!("Starting CsvLoader producer task...");
            let loader = CsvLoader::new(path.clone(), config.csv.has_headers);
            Producer::new(loader).spawn()
        }
        DataSource::Sim => {
            info!("Starting SimulatorLoader producer task...");
            Producer::new(SimulatorLoader::new(config.simulator.clone())).spawn()
        }
    }
}
