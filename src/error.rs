use std::path::PathBuf;

use thiserror::Error;

use crate::types::Vertex;

#[derive(Debug, Error)]
pub enum ToggleError {
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("vertex {vertex} out of range for a graph with {n} vertices")]
    IndexOutOfRange { vertex: Vertex, n: usize },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("graph has {n} vertices, at most {max} are supported")]
    GraphTooLarge { n: usize, max: usize },

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ToggleError {
    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        ToggleError::InvalidState { reason: reason.into() }
    }

    pub(crate) fn invalid_graph(reason: impl Into<String>) -> Self {
        ToggleError::InvalidGraph { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, ToggleError>;
