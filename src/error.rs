//! Error taxonomy shared by every solver.

use thiserror::Error;

/// Errors raised by graph construction and solver setup.
///
/// Searching never fails: once a solver is built, `solve` always returns a
/// valid clique. Errors are reserved for precondition violations that are
/// detected before any search begins.
#[derive(Debug, Error)]
pub enum CliqueError {
    /// The adjacency structure violates the graph invariants
    /// (self-loop, asymmetric edge, or neighbour not present as a vertex).
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// The input is too large for the selected exact solver.
    #[error("resource limit exceeded: {vertices} vertices, limit is {limit}")]
    ResourceExceeded {
        /// Vertex count of the rejected input.
        vertices: usize,
        /// Configured ceiling.
        limit: usize,
    },

    /// No clique of the requested fixed size exists.
    #[error("no clique of size {k}")]
    NoSolution {
        /// Requested clique size.
        k: usize,
    },

    /// A solver configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed DIMACS input.
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O failure while reading input.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CliqueError>;
