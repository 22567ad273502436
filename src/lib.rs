//! AdjacencyGraph — an in-memory adjacency-list graph.
//!
//! Vertices map to ordered neighbor sequences. The graph supports vertex and
//! edge insertion, breadth-first and depth-first traversal, and export as
//! adjacency-list text or a 0/1 adjacency matrix.

pub mod cli;
pub mod config;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::GraphConfig;
pub use format::{EdgeSpec, GraphDocument};
pub use graph::{bfs, dfs, AdjacencyGraph, AdjacencyMatrix, GraphBuilder, TraversalOrder};
pub use types::{GraphError, GraphResult, VertexId};
