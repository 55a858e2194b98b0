use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;

/// Environment variable that overrides the configuration file location.
const CONFIG_PATH_VAR: &str = "EXECUTOR_CONFIG";

#[derive(Debug, Deserialize, Clone)]
pub struct SearcherConfig {
    pub path_step_cap: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulatorConfig {
    pub total_nodes: usize,
    pub edges_per_node: usize,
    pub min_weight: i32,
    pub max_weight: i32,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CsvConfig {
    pub has_headers: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    pub show_tables: bool,
}

/// A single `from -> to` query, addressed by node label.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub searcher: SearcherConfig,
    pub simulator: SimulatorConfig,
    pub csv: CsvConfig,
    pub report: ReportConfig,
    #[serde(default)]
    pub queries: Vec<QueryConfig>,
}

/// Loads configuration from `crates/executor/Config.toml` (or `$EXECUTOR_CONFIG`)
/// and environment variables.
pub fn load_config() -> Result<Config, Error> {
    let config_file_path = match env::var(CONFIG_PATH_VAR) {
        Ok(path) => PathBuf::from(path),
        Err(_) => {
            let base_path = env::current_dir().map_err(|e| {
                Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
            })?;
            base_path
                .join("crates")
                .join("executor")
                .join("Config.toml")
        }
    };

    load_config_from(&config_file_path)
}

/// Loads configuration from the given file, overlaid with `EXECUTOR__*` variables
/// (e.g. `EXECUTOR__SEARCHER__PATH_STEP_CAP=50`).
pub fn load_config_from(config_file_path: &Path) -> Result<Config, Error> {
    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at calculated path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(config_file_path).required(true))
        .add_source(
            Environment::with_prefix("EXECUTOR")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
