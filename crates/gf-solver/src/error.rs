//! Error types for solver operations.

use gf_core::GfError;
use thiserror::Error;

/// Errors that can occur before solving. A well-formed topology never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Graph error: {0}")]
    Graph(#[from] gf_graph::GraphError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for GfError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::Graph(inner) => inner.into(),
        }
    }
}
