//! The vertex identifier bound.

use std::hash::Hash;

/// Anything usable as a vertex identifier.
///
/// Identity is by equality. Operations that need ordering or printing
/// (the adjacency matrix and the adjacency-list text) add `Ord` or
/// `Display` on their own.
pub trait VertexId: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> VertexId for T {}
