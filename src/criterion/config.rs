//! Search Configuration
//!
//! Options for the adjustment-set search and the JSON IO shared by every
//! serializable object in the crate.
use crate::errors::MAdjustError;
use crate::graph::MGraph;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_include_empty_set() -> bool {
    true
}
fn default_parallel() -> bool {
    false
}
fn default_num_threads() -> Option<usize> {
    None
}

/// Configuration for [`crate::criterion::MAdjustment::search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Whether the empty adjustment set is a candidate.
    #[serde(default = "default_include_empty_set")]
    pub include_empty_set: bool,
    /// Evaluate candidates on a rayon thread pool. Results are identical to the sequential search.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Number of threads for the parallel search, all available cores if `None`.
    #[serde(default = "default_num_threads")]
    pub num_threads: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            include_empty_set: default_include_empty_set(),
            parallel: default_parallel(),
            num_threads: default_num_threads(),
        }
    }
}

impl SearchConfig {
    /// Set whether the empty set is a candidate.
    /// * `include_empty_set` - If `false`, only non-empty subsets are enumerated.
    pub fn set_include_empty_set(mut self, include_empty_set: bool) -> Self {
        self.include_empty_set = include_empty_set;
        self
    }

    /// Set whether candidates are evaluated in parallel.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the number of threads used by the parallel search.
    pub fn set_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.num_threads = num_threads;
        self
    }
}

/// IO
pub trait JsonIO: Serialize + DeserializeOwned + Sized {
    /// Save the object as json to a file.
    ///
    /// * `path` - Path to save to.
    fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), MAdjustError> {
        fs::write(path, self.json_dump()?).map_err(|e| MAdjustError::UnableToWrite(e.to_string()))
    }

    /// Dump the object as a json string.
    fn json_dump(&self) -> Result<String, MAdjustError> {
        serde_json::to_string(self).map_err(|e| MAdjustError::UnableToWrite(e.to_string()))
    }

    /// Load the object from a json string.
    fn from_json(json_str: &str) -> Result<Self, MAdjustError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| MAdjustError::UnableToRead(e.to_string()))
    }

    /// Load the object from a path to a json file.
    fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, MAdjustError> {
        let json_str = fs::read_to_string(path).map_err(|e| MAdjustError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl JsonIO for SearchConfig {}
impl JsonIO for MGraph {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_search_config_default() {
        let config = SearchConfig::default();
        assert!(config.include_empty_set);
        assert!(!config.parallel);
        assert_eq!(config.num_threads, None);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = SearchConfig::from_json(r#"{"parallel": true}"#).unwrap();
        assert!(config.parallel);
        assert!(config.include_empty_set);
    }

    #[test]
    fn test_setters() {
        let config = SearchConfig::default()
            .set_include_empty_set(false)
            .set_parallel(true)
            .set_num_threads(Some(2));
        assert!(!config.include_empty_set);
        assert_eq!(config.num_threads, Some(2));
    }

    #[test]
    fn test_graph_io_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("graph.json");
        let g = MGraph::from_edges(["X", "Y", "R_Y"], &[("X", "Y"), ("Y", "R_Y")]).unwrap();
        g.save_json(&file_path).unwrap();
        let g2 = MGraph::load_json(&file_path).unwrap();
        assert_eq!(g.edges(), g2.edges());
        assert_eq!(g.nodes().collect::<Vec<_>>(), g2.nodes().collect::<Vec<_>>());
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            SearchConfig::from_json("{not json"),
            Err(MAdjustError::UnableToRead(_))
        ));
        assert!(matches!(
            MGraph::load_json("/nonexistent/graph.json"),
            Err(MAdjustError::UnableToRead(_))
        ));
    }
}
