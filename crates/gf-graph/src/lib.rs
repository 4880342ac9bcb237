//! gf-graph: normalized topology and connectivity graph for gridflow.
//!
//! Provides:
//! - Normalized topology records (Component, Edge, Topology)
//! - Reference validation ahead of graph construction
//! - A builder that expands wiring and component internals into one
//!   immutable port-level adjacency structure
//! - Stable indexing between `componentId:side` ports and graph slots
//!
//! # Example
//!
//! ```
//! use gf_components::{ComponentKind, OperatingData};
//! use gf_core::{PortRef, Side};
//! use gf_graph::{Component, ConnectivityGraph, Edge, Topology};
//!
//! let topology = Topology::new(
//!     vec![
//!         Component::new("ps", ComponentKind::Source, OperatingData::default()),
//!         Component::new("bus", ComponentKind::Bus, OperatingData::default()),
//!     ],
//!     vec![Edge::new(
//!         "e1",
//!         PortRef::new("ps", Side::Bottom),
//!         PortRef::new("bus", Side::Top),
//!     )],
//! );
//! let graph = ConnectivityGraph::from_topology(topology).unwrap();
//!
//! assert_eq!(graph.port_count(), 8);
//! // one wire plus the bus's six internal pairs, each stored both ways
//! assert_eq!(graph.link_count(), 14);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub mod topology;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::ConnectivityGraph;
pub use indexing::PortIndex;
pub use topology::{Component, Edge, Position, Topology};
