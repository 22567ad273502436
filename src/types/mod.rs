//! Shared types for the adjacency-graph library.

pub mod error;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use vertex::VertexId;

/// Separator between neighbors in the adjacency-list text.
pub const NEIGHBOR_SEPARATOR: &str = ", ";

/// Value of a matrix cell when the edge is present.
pub const EDGE_PRESENT: u8 = 1;

/// Value of a matrix cell when the edge is absent.
pub const EDGE_ABSENT: u8 = 0;
