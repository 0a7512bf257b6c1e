//! Error types for treeflow.

use thiserror::Error;

/// Errors surfaced at the crate boundary.
///
/// A failed search is not an error; see [`crate::query::Resolution`].
#[derive(Debug, Error)]
pub enum TreeflowError {
    /// The input text is not valid JSON. No value is produced for it; the
    /// consumer renders an empty collection instead of a partial graph.
    #[error("malformed JSON input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// A document file could not be read.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TreeflowError>;
