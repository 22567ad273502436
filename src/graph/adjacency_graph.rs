//! Core graph structure — vertices mapped to ordered neighbor sequences.

use std::fmt;

use indexmap::IndexMap;

use crate::config::GraphConfig;
use crate::types::VertexId;

use super::export::{adjacency_list_text, adjacency_matrix, AdjacencyMatrix};
use super::traversal::{bfs, dfs, TraversalOrder};

/// An in-memory graph stored as an adjacency list.
///
/// Vertices keep the order in which they were first inserted. Neighbor
/// sequences keep edge insertion order and, unless the config says
/// otherwise, may contain duplicates.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V: VertexId> {
    /// Adjacency map: vertex -> neighbors in insertion order.
    adjacency: IndexMap<V, Vec<V>>,
    /// Insertion policy.
    config: GraphConfig,
}

impl<V: VertexId> AdjacencyGraph<V> {
    /// Create a new empty graph with the default config.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new empty graph with a specific config.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            adjacency: IndexMap::new(),
            config,
        }
    }

    /// The config this graph was created with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of vertices with an adjacency entry.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total length of all neighbor sequences.
    ///
    /// An undirected edge contributes two entries, a directed one contributes one.
    pub fn edge_entry_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// True when no vertex has been added.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether the vertex has an adjacency entry.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Whether `to` appears in `from`'s neighbor sequence.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.neighbors(from).contains(to)
    }

    /// Neighbors of a vertex in insertion order. Unknown vertices have none.
    pub fn neighbors(&self, vertex: &V) -> &[V] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All vertices in first-insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Iterate `(vertex, neighbors)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[V])> {
        self.adjacency.iter().map(|(v, n)| (v, n.as_slice()))
    }

    /// Add a vertex. A vertex that already exists keeps its neighbors.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Add an edge, creating either endpoint if needed.
    ///
    /// `to` is appended to `from`'s neighbors; for an undirected edge `from`
    /// is also appended to `to`'s neighbors.
    pub fn add_edge(&mut self, from: V, to: V, directed: bool) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        self.push_neighbor(&from, to.clone());
        if !directed {
            self.push_neighbor(&to, from);
        }
    }

    /// Shorthand for `add_edge(from, to, true)`.
    pub fn add_arc(&mut self, from: V, to: V) {
        self.add_edge(from, to, true);
    }

    fn push_neighbor(&mut self, vertex: &V, neighbor: V) {
        let dedup = self.config.dedup_edges;
        let Some(list) = self.adjacency.get_mut(vertex) else {
            return;
        };
        if dedup && list.contains(&neighbor) {
            log::debug!("Skipped duplicate neighbor entry ({} entries kept)", list.len());
            return;
        }
        list.push(neighbor);
        log::trace!("Neighbor appended ({} entries)", list.len());
    }

    /// Breadth-first order of every vertex reachable from `start`.
    pub fn bfs(&self, start: &V) -> Vec<V> {
        bfs(self, start)
    }

    /// Depth-first pre-order of every vertex reachable from `start`.
    pub fn dfs(&self, start: &V) -> Vec<V> {
        dfs(self, start)
    }

    /// Run the traversal selected by `order`.
    pub fn traverse(&self, start: &V, order: TraversalOrder) -> Vec<V> {
        match order {
            TraversalOrder::BreadthFirst => self.bfs(start),
            TraversalOrder::DepthFirst => self.dfs(start),
        }
    }
}

impl<V: VertexId + fmt::Display> AdjacencyGraph<V> {
    /// One `vertex: [n1, n2, ...]` line per vertex.
    pub fn adjacency_list(&self) -> String {
        adjacency_list_text(self)
    }
}

impl<V: VertexId + Ord> AdjacencyGraph<V> {
    /// The 0/1 adjacency matrix over the sorted vertex set.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix<V> {
        adjacency_matrix(self)
    }
}

impl<V: VertexId> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId + fmt::Display> fmt::Display for AdjacencyGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.adjacency_list())
    }
}
