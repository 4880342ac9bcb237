//! gf-project: network definition format, normalization and wiring checks.
//!
//! # Example
//!
//! ```
//! use gf_project::{NetworkDef, solve_network};
//!
//! let def = NetworkDef::from_json_str(
//!     r#"{
//!         "components": [
//!             {"id": "ps", "type": "powerSource", "position": {"x": 0, "y": 0}},
//!             {"id": "ld", "type": "load", "position": {"x": 0, "y": 100},
//!              "data": {"status": "running"}}
//!         ],
//!         "wires": [{"id": "e1", "source": "ps", "target": "ld"}]
//!     }"#,
//! )
//! .unwrap();
//!
//! let solution = solve_network(&def).unwrap();
//! assert!(solution.is_powered("ld"));
//! ```

pub mod adapter;
pub mod schema;
pub mod validate;

pub use adapter::{WireEnd, infer_side, normalize, resolve_edge_voltage, side_from_handle};
pub use schema::*;
pub use validate::{WiringIssue, check_topology, check_wiring};

use gf_core::GfError;
use gf_graph::{ConnectivityGraph, GraphError};
use gf_solver::{GridSolution, solve};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Topology error: {0}")]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Core(#[from] GfError),

    #[error("Component {component} has unknown type '{kind}'")]
    UnknownComponentType { component: String, kind: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Normalize, build and solve in one call.
pub fn solve_network(def: &NetworkDef) -> ProjectResult<GridSolution> {
    let topology = normalize(def)?;
    let graph = ConnectivityGraph::from_topology(topology)?;
    Ok(solve(&graph))
}
