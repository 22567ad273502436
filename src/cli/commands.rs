//! CLI command implementations.

use std::io::Write;
use std::path::Path;

use crate::config::GraphConfig;
use crate::format::GraphDocument;
use crate::graph::{AdjacencyGraph, TraversalOrder};
use crate::types::GraphResult;

/// Output format for `adjg` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// True for JSON output.
    pub fn is_json(&self) -> bool {
        *self == Self::Json
    }
}

/// Load a graph document and build it with the given config.
pub fn load_graph(path: &Path, config: GraphConfig) -> GraphResult<AdjacencyGraph<String>> {
    let doc = GraphDocument::read_from_file(path)?;
    Ok(doc.into_graph(config))
}

/// Traverse from a start vertex and print the visit order.
pub fn cmd_traverse(
    out: &mut impl Write,
    path: &Path,
    config: GraphConfig,
    start: &str,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path, config)?;
    let start = start.to_string();
    let visited = graph.traverse(&start, order);

    if json {
        let info = serde_json::json!({
            "start": start,
            "order": order.name(),
            "known_start": graph.contains_vertex(&start),
            "visited": visited,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        if !graph.contains_vertex(&start) {
            log::warn!("Start vertex {:?} is not in the graph", start);
        }
        writeln!(out, "{} from {}: {}", order.name(), start, visited.join(" -> "))?;
    }
    Ok(())
}

/// Print the adjacency-list text.
pub fn cmd_list(
    out: &mut impl Write,
    path: &Path,
    config: GraphConfig,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path, config)?;

    if json {
        // An array keeps vertex insertion order; a JSON object would not.
        let entries: Vec<serde_json::Value> = graph
            .iter()
            .map(|(v, n)| serde_json::json!({"vertex": v, "neighbors": n}))
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
    } else {
        writeln!(out, "{}", graph.adjacency_list())?;
    }
    Ok(())
}

/// Print the adjacency matrix over the sorted vertices.
pub fn cmd_matrix(
    out: &mut impl Write,
    path: &Path,
    config: GraphConfig,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path, config)?;
    let matrix = graph.adjacency_matrix();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&matrix)?)?;
    } else {
        writeln!(out, "{}", matrix)?;
    }
    Ok(())
}

/// Print the neighbor sequence of one vertex.
pub fn cmd_neighbors(
    out: &mut impl Write,
    path: &Path,
    config: GraphConfig,
    vertex: &str,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path, config)?;
    let neighbors = graph.neighbors(&vertex.to_string());

    if json {
        let info = serde_json::json!({
            "vertex": vertex,
            "neighbors": neighbors,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        writeln!(out, "{}: [{}]", vertex, neighbors.join(", "))?;
    }
    Ok(())
}

/// Print summary counts for a graph document.
pub fn cmd_info(
    out: &mut impl Write,
    path: &Path,
    config: GraphConfig,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path, config)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "neighbor_entries": graph.edge_entry_count(),
            "dedup_edges": graph.config().dedup_edges,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        writeln!(out, "File: {}", path.display())?;
        writeln!(out, "Vertices: {}", graph.vertex_count())?;
        writeln!(out, "Neighbor entries: {}", graph.edge_entry_count())?;
        writeln!(out, "Dedup edges: {}", graph.config().dedup_edges)?;
    }
    Ok(())
}
