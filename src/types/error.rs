//! Error types for the adjacency-graph library.

use thiserror::Error;

/// All errors that can occur in the adjacency-graph library.
///
/// Graph operations themselves never fail; errors only arise while loading
/// graph documents, configuration, or command-line input.
#[derive(Error, Debug)]
pub enum GraphError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON graph document.
    #[error("Invalid graph document: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// An argument could not be interpreted (e.g. an unknown traversal order).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience result type for adjacency-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
