//! Error types for component rule lookups.

use gf_core::GfError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    #[error("Unknown component type: {name}")]
    UnknownType { name: String },
}

impl From<ComponentError> for GfError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::UnknownType { .. } => GfError::InvalidArg {
                what: "component type",
            },
        }
    }
}
