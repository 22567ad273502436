//! Export projections: adjacency-list text and adjacency matrix.

use std::fmt;

use serde::Serialize;

use crate::types::{VertexId, EDGE_ABSENT, EDGE_PRESENT, NEIGHBOR_SEPARATOR};

use super::AdjacencyGraph;

/// Render one `vertex: [n1, n2, ...]` line per vertex, in insertion order.
pub fn adjacency_list_text<V: VertexId + fmt::Display>(graph: &AdjacencyGraph<V>) -> String {
    graph
        .iter()
        .map(|(vertex, neighbors)| {
            let joined: Vec<String> = neighbors.iter().map(ToString::to_string).collect();
            format!("{}: [{}]", vertex, joined.join(NEIGHBOR_SEPARATOR))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A square 0/1 matrix over the graph's vertices in ascending order.
///
/// `matrix[i][j]` is 1 iff `vertices[j]` is in `vertices[i]`'s neighbor
/// sequence. Duplicate entries still count once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyMatrix<V> {
    /// Row and column labels.
    vertices: Vec<V>,
    /// Row-major cells.
    matrix: Vec<Vec<u8>>,
}

impl<V: VertexId + Ord> AdjacencyMatrix<V> {
    /// Vertex labels; row `i` and column `i` both refer to `vertices()[i]`.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Matrix rows.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.matrix
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Cell value, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.matrix.get(row)?.get(col).copied()
    }

    /// Row/column index of a vertex.
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertices.binary_search(vertex).ok()
    }

    /// Split into `(matrix, vertices)`.
    pub fn into_parts(self) -> (Vec<Vec<u8>>, Vec<V>) {
        (self.matrix, self.vertices)
    }
}

impl<V: fmt::Display> fmt::Display for AdjacencyMatrix<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.vertices.iter().map(ToString::to_string).collect();
        let width = labels.iter().map(String::len).max().unwrap_or(1).max(1);

        write!(f, "{:width$}", "", width = width)?;
        for label in &labels {
            write!(f, " {:>width$}", label, width = width)?;
        }
        for (label, row) in labels.iter().zip(&self.matrix) {
            writeln!(f)?;
            write!(f, "{:width$}", label, width = width)?;
            for cell in row {
                write!(f, " {:>width$}", cell, width = width)?;
            }
        }
        Ok(())
    }
}

/// Build the adjacency matrix of a graph.
pub fn adjacency_matrix<V: VertexId + Ord>(graph: &AdjacencyGraph<V>) -> AdjacencyMatrix<V> {
    let mut vertices: Vec<V> = graph.vertices().cloned().collect();
    vertices.sort();

    let size = vertices.len();
    let mut matrix = vec![vec![EDGE_ABSENT; size]; size];

    for (i, vertex) in vertices.iter().enumerate() {
        for neighbor in graph.neighbors(vertex) {
            // Neighbors always have entries when added through the graph API.
            if let Ok(j) = vertices.binary_search(neighbor) {
                matrix[i][j] = EDGE_PRESENT;
            }
        }
    }

    AdjacencyMatrix { vertices, matrix }
}
