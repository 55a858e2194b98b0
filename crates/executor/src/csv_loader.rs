use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use tracing::{error, info};

use super::error::Error;
use super::types::{GraphLoader, LabeledGraph};
use common::types::Weight;

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_node: String,

    #[serde(rename = "to")]
    pub to_node: String,

    #[serde(rename = "weight")]
    pub weight: Weight,
}

/// Builds a graph from a `from,to,weight` CSV file.
///
/// Nodes are created the first time their label appears, so indices follow the
/// order of first appearance in the file.
pub struct CsvLoader {
    path: String,
    has_headers: bool,
}

impl CsvLoader {
    pub fn new(path: String, has_headers: bool) -> Self {
        CsvLoader { path, has_headers }
    }

    fn parse_csv_to_graph(&self) -> Result<LabeledGraph, Error> {
        let file = File::open(&self.path).map_err(|e| {
            error!("Failed to read file {}: {:?}", self.path, e);
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(self.has_headers)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut graph = LabeledGraph::new();
        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            graph.connect(&record.from_node, &record.to_node, record.weight)?;
        }
        Ok(graph)
    }
}

#[async_trait::async_trait]
impl GraphLoader for CsvLoader {
    async fn load(self) -> Result<LabeledGraph, Error> {
        let graph = self.parse_csv_to_graph()?;
        info!(
            "CsvLoader: loaded {} nodes and {} edges from {}",
            graph.graph().len(),
            graph.graph().edge_count(),
            self.path
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MOCK_CSV_CONTENT: &str = "\
from,to,weight
A,B,4
B,C,-2
C,A,7
D,D,0
";

    fn write_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(content.as_bytes())
            .expect("Failed to write mock content");
        temp_file
    }

    #[test]
    fn test_parse_csv_to_graph_success() {
        let temp_file = write_csv(MOCK_CSV_CONTENT);
        let path = temp_file
            .path()
            .to_str()
            .expect("Failed to get path string");

        let loader = CsvLoader::new(path.to_string(), true);
        let result = loader.parse_csv_to_graph();

        assert!(
            result.is_ok(),
            "Parsing failed with error: {:?}",
            result.err()
        );

        let graph = result.unwrap();
        let edges: Vec<_> = graph.graph().all_edges().collect();

        assert_eq!(graph.graph().len(), 4, "Should have created 4 nodes.");
        assert_eq!(edges, vec![(0, 1, 4), (1, 2, -2), (2, 0, 7), (3, 3, 0)]);
        assert_eq!(graph.label_at(3), "D");
    }

    #[test]
    fn test_parse_csv_without_headers() {
        let temp_file = write_csv("X,Y,3\nY,X,5\n");
        let path = temp_file.path().to_str().unwrap().to_string();

        let graph = CsvLoader::new(path, false).parse_csv_to_graph().unwrap();

        assert_eq!(graph.graph().edge_count(), 2);
        assert_eq!(graph.find("Y").unwrap().index(), 1);
    }

    #[test]
    fn test_parse_csv_rejects_bad_weight() {
        let temp_file = write_csv("from,to,weight\nA,B,heavy\n");
        let path = temp_file.path().to_str().unwrap().to_string();

        let result = CsvLoader::new(path, true).parse_csv_to_graph();
        assert!(matches!(result, Err(Error::CsvError(_))));
    }

    #[test]
    fn test_parse_csv_to_graph_file_not_found() {
        let loader = CsvLoader::new("non_existent_file.csv".to_string(), true);
        let result = loader.parse_csv_to_graph();

        assert!(
            result.is_err(),
            "Should have failed to open non-existent file."
        );

        if let Err(Error::IoError(e)) = result {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
        } else {
            panic!("Expected IoError, got: {:?}", result.err());
        }
    }
}
