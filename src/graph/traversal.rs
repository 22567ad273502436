//! Graph traversal algorithms (BFS, DFS).

use std::collections::{HashSet, VecDeque};
use std::fmt;

use crate::types::VertexId;

use super::AdjacencyGraph;

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalOrder {
    /// Visit vertices layer by layer, nearest first.
    #[default]
    BreadthFirst,
    /// Exhaust each branch before backtracking (pre-order).
    DepthFirst,
}

impl TraversalOrder {
    /// Return a short name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }

    /// Parse an order from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth_first" | "breadth-first" => Some(Self::BreadthFirst),
            "dfs" | "depth_first" | "depth-first" => Some(Self::DepthFirst),
            _ => None,
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// BFS traversal from a starting vertex.
///
/// A vertex is marked visited when dequeued, so the queue may briefly hold
/// the same vertex twice; the second copy is dropped. A start vertex with no
/// adjacency entry yields `[start]`.
pub fn bfs<V: VertexId>(graph: &AdjacencyGraph<V>, start: &V) -> Vec<V> {
    let mut visited: HashSet<&V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut queue: VecDeque<&V> = VecDeque::new();

    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.clone());

        for neighbor in graph.neighbors(current) {
            if !visited.contains(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    log::debug!("bfs visited {} vertices", order.len());
    order
}

/// DFS traversal from a starting vertex, in recursive pre-order.
///
/// Uses an explicit stack. Neighbors are pushed in reverse so the first
/// neighbor is explored first, and the visited check happens on pop; the
/// resulting order is the same as the recursive definition.
pub fn dfs<V: VertexId>(graph: &AdjacencyGraph<V>, start: &V) -> Vec<V> {
    let mut visited: HashSet<&V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut stack: Vec<&V> = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.clone());

        for neighbor in graph.neighbors(current).iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    log::debug!("dfs visited {} vertices", order.len());
    order
}
