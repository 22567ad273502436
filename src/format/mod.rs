//! Graph input documents.

pub mod document;

pub use document::{EdgeSpec, GraphDocument};
