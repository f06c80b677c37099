//! Errors raised by graph queries

use thiserror::Error;

/// Errors that can occur in property graph operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The node (rendered as `name:category`) is not a key of the graph
    #[error("Node not found: {0}")]
    NodeNotFound(String),
}

impl GraphError {
    pub(crate) fn node_not_found(node: &super::Node) -> Self {
        GraphError::NodeNotFound(format!("{}:{}", node.name(), node.category()))
    }
}

/// Result type for property graph operations
pub type GraphResult<T> = Result<T, GraphError>;
