//! In-memory graph operations — the core data structure.

pub mod adjacency_graph;
pub mod builder;
pub mod export;
pub mod traversal;

pub use adjacency_graph::AdjacencyGraph;
pub use builder::GraphBuilder;
pub use export::{adjacency_list_text, adjacency_matrix, AdjacencyMatrix};
pub use traversal::{bfs, dfs, TraversalOrder};
