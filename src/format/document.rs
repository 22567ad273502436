//! JSON graph documents.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::GraphConfig;
use crate::graph::AdjacencyGraph;
use crate::types::GraphResult;

/// One edge in a graph document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// Source vertex.
    pub from: String,
    /// Target vertex.
    pub to: String,
    /// One-way edge when true.
    #[serde(default)]
    pub directed: bool,
}

/// A graph described as vertices plus edges.
///
/// ```json
/// { "vertices": ["e"], "edges": [{ "from": "a", "to": "b" }, { "from": "b", "to": "c", "directed": true }] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Vertices to add before any edge, in order.
    #[serde(default)]
    pub vertices: Vec<String>,
    /// Edges to add, in order.
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphDocument {
    /// Parse a document from JSON text.
    pub fn from_json_str(text: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a document from any reader.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_json_str(&text)
    }

    /// Read a document from a file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let doc = Self::from_json_str(&text)?;
        log::debug!(
            "Read graph document {}: {} vertices, {} edges",
            path.display(),
            doc.vertices.len(),
            doc.edges.len()
        );
        Ok(doc)
    }

    /// Build a graph: vertices first, then edges, both in document order.
    pub fn into_graph(self, config: GraphConfig) -> AdjacencyGraph<String> {
        let mut graph = AdjacencyGraph::with_config(config);
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for edge in self.edges {
            graph.add_edge(edge.from, edge.to, edge.directed);
        }
        graph
    }
}
