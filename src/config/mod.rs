//! Graph configuration with TOML persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::GraphResult;

/// Behavioural knobs for an [`AdjacencyGraph`](crate::graph::AdjacencyGraph).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Skip appending a neighbor that is already in the sequence.
    ///
    /// Off by default: repeated `add_edge` calls append duplicate entries,
    /// which traversal filters through its visited set.
    pub dedup_edges: bool,
}

impl GraphConfig {
    /// Config that rejects duplicate neighbor entries.
    pub fn deduplicating() -> Self {
        Self { dedup_edges: true }
    }

    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> GraphResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded graph config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
