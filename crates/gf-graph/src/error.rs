//! Graph-specific error types.

use gf_core::{GfError, PortRef};

/// Malformed-topology errors, raised before any graph is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint names a component that doesn't exist.
    UnknownComponent { edge: String, component: String },

    /// Two components share one id.
    DuplicateComponent { id: String },

    /// Two edges share one id.
    DuplicateEdge { id: String },

    /// Port not present in the index map.
    PortNotFound { port: PortRef },
}

pub type GraphResult<T> = Result<T, GraphError>;

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::UnknownComponent { edge, component } => {
                write!(
                    f,
                    "Edge {} refers to non-existent component {}",
                    edge, component
                )
            }
            GraphError::DuplicateComponent { id } => {
                write!(f, "Component id {} is used more than once", id)
            }
            GraphError::DuplicateEdge { id } => {
                write!(f, "Edge id {} is used more than once", id)
            }
            GraphError::PortNotFound { port } => {
                write!(f, "Port {} not found in index map", port)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for GfError {
    fn from(err: GraphError) -> Self {
        GfError::Invariant {
            what: err.to_string(),
        }
    }
}
